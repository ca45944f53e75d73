use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced when a generated post is validated, rendered or written.
/// Plain generation never fails.
#[derive(Debug, Error)]
pub enum ArchetypeError {
    #[error("Title {title:?} does not produce a usable slug")]
    EmptySlug { title: String },

    #[error("Post already exists: {}", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("Post path {} leaves the content directory", path.display())]
    OutsideRoot { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Error serializing YAML front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Error serializing TOML front matter: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Errors in a collection field declaration.
#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("Field declaration {0:?} must look like \"name: type\"")]
    MissingType(String),

    #[error("Unknown field type {kind:?} for field {name:?}")]
    UnknownType { name: String, kind: String },

    #[error("Only object fields can declare nested fields ({0})")]
    UnexpectedFields(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ArchetypeError::AlreadyExists { path: PathBuf::from("posts/hello.md") };
        assert_eq!(err.to_string(), "Post already exists: posts/hello.md");

        let err = ArchetypeError::OutsideRoot { path: PathBuf::from("posts/../../x.md") };
        assert_eq!(err.to_string(), "Post path posts/../../x.md leaves the content directory");

        let err = ArchetypeError::EmptySlug { title: "   ".to_string() };
        assert_eq!(err.to_string(), "Title \"   \" does not produce a usable slug");

        let err = SchemaError::UnknownType { name: "title".to_string(), kind: "colour".to_string() };
        assert_eq!(err.to_string(), "Unknown field type \"colour\" for field \"title\"");
    }
}
