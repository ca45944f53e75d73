use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::SchemaError;
use crate::front_matter::FrontMatter;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Date,
    Checkbox,
    List,
    Url,
    Markdown,
    Object(Vec<Field>),
}

impl FieldKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::Checkbox => "checkbox",
            FieldKind::List => "list",
            FieldKind::Url => "url",
            FieldKind::Markdown => "markdown",
            FieldKind::Object(_) => "object",
        }
    }

    fn from_type_name(name: &str, kind: &str) -> Result<FieldKind, SchemaError> {
        let kind = match kind {
            "text" => FieldKind::Text,
            "date" => FieldKind::Date,
            "checkbox" => FieldKind::Checkbox,
            "list" => FieldKind::List,
            "url" => FieldKind::Url,
            "markdown" => FieldKind::Markdown,
            "object" => FieldKind::Object(vec![]),
            _ => return Err(SchemaError::UnknownType { name: name.to_string(), kind: kind.to_string() }),
        };
        Ok(kind)
    }
}

/// One editable field of a collection, as shown in the CMS form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "FieldDecl")]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub label: Option<String>,
}

/// A field is declared either as `"name: type"` or as a table.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldDecl {
    Short(String),
    Full {
        name: String,
        #[serde(rename = "type")]
        kind: String,
        label: Option<String>,
        #[serde(default)]
        fields: Vec<Field>,
    },
}

impl TryFrom<FieldDecl> for Field {
    type Error = SchemaError;

    fn try_from(decl: FieldDecl) -> Result<Self, Self::Error> {
        match decl {
            FieldDecl::Short(decl) => decl.parse(),
            FieldDecl::Full { name, kind, label, fields } => {
                let kind = match FieldKind::from_type_name(&name, kind.trim())? {
                    FieldKind::Object(_) => FieldKind::Object(fields),
                    _ if !fields.is_empty() => return Err(SchemaError::UnexpectedFields(name)),
                    kind => kind,
                };
                Ok(Field { name, kind, label })
            }
        }
    }
}

impl FromStr for Field {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, kind)) = s.split_once(':') else {
            return Err(SchemaError::MissingType(s.to_string()));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(SchemaError::MissingType(s.to_string()));
        }

        Ok(Field {
            name: name.to_string(),
            kind: FieldKind::from_type_name(name, kind.trim())?,
            label: None,
        })
    }
}

impl Field {
    fn fmt_indented(&self, f: &mut Formatter<'_>, depth: usize) -> std::fmt::Result {
        write!(f, "{:indent$}{}: {}", "", self.name, self.kind.type_name(), indent = depth * 2)?;
        if let Some(ref label) = self.label {
            write!(f, " ({})", label)?;
        }
        if let FieldKind::Object(ref fields) = self.kind {
            for field in fields {
                writeln!(f)?;
                field.fmt_indented(f, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Collection {
    pub name: String,
    /// Storage pattern, e.g. `src:posts/*.md`
    pub store: String,
    pub fields: Vec<Field>,
}

impl Collection {
    /// The blog's `posts` collection.
    pub fn default_posts() -> Collection {
        let field = |name: &str, kind: FieldKind| Field { name: name.to_string(), kind, label: None };

        let comments = Field {
            label: Some("Comments".to_string()),
            ..field("comments", FieldKind::Object(vec![field("src", FieldKind::Url)]))
        };

        Collection {
            name: "posts".to_string(),
            store: "src:posts/*.md".to_string(),
            fields: vec![
                field("title", FieldKind::Text),
                field("date", FieldKind::Date),
                field("author", FieldKind::Text),
                field("draft", FieldKind::Checkbox),
                field("tags", FieldKind::List),
                comments,
                field("content", FieldKind::Markdown),
            ],
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Front matter keys this collection gives the editor no field for.
    pub fn undeclared_keys(&self, front_matter: &FrontMatter) -> Vec<&'static str> {
        front_matter.keys()
            .into_iter()
            .filter(|key| self.field(key).is_none())
            .collect()
    }
}

/// Directory the CMS lets editors upload files into.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Upload {
    pub name: String,
    pub store: String,
}
