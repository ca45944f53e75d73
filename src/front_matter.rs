use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ArchetypeError;

/// Metadata header seeded into a new post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontMatterFormat {
    /// `---` delimited YAML
    #[default]
    Yaml,
    /// `+++` delimited TOML
    Toml,
}

impl FrontMatterFormat {
    fn delimiter(&self) -> &'static str {
        match self {
            FrontMatterFormat::Yaml => "---",
            FrontMatterFormat::Toml => "+++",
        }
    }
}

impl FrontMatter {
    /// Names of the keys this header will carry, in output order.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = vec!["title", "date"];
        if self.author.is_some() {
            keys.push("author");
        }
        keys.push("draft");
        if self.tags.is_some() {
            keys.push("tags");
        }
        keys
    }

    /// Renders the whole file: the delimited header followed by an empty body.
    pub fn render(&self, format: FrontMatterFormat) -> Result<String, ArchetypeError> {
        let header = match format {
            FrontMatterFormat::Yaml => serde_yaml::to_string(self)?,
            FrontMatterFormat::Toml => toml::to_string(self)?,
        };

        let delimiter = format.delimiter();
        let mut buf = String::with_capacity(header.len() + 2 * delimiter.len() + 3);
        buf.push_str(delimiter);
        buf.push('\n');
        buf.push_str(&header);
        if !header.ends_with('\n') {
            buf.push('\n');
        }
        buf.push_str(delimiter);
        buf.push('\n');
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::{fixed_instant, release_front_matter};

    use super::*;

    fn yaml_header(rendered: &str) -> &str {
        let inner = rendered.strip_prefix("---\n").unwrap();
        inner.strip_suffix("---\n").unwrap()
    }

    #[test]
    fn test_keys() {
        let fm = release_front_matter();
        assert_eq!(fm.keys(), vec!["title", "date", "author", "draft", "tags"]);

        let minimal = FrontMatter { author: None, tags: None, ..fm };
        assert_eq!(minimal.keys(), vec!["title", "date", "draft"]);
    }

    #[test]
    fn test_render_yaml() {
        let fm = release_front_matter();
        let rendered = fm.render(FrontMatterFormat::Yaml).unwrap();

        assert!(rendered.starts_with("---\n"));
        assert!(rendered.ends_with("---\n"));
        assert!(rendered.contains("title: Release 3.0\n"));
        assert!(rendered.contains("draft: true\n"));

        let parsed: FrontMatter = serde_yaml::from_str(yaml_header(&rendered)).unwrap();
        assert_eq!(parsed, fm);
    }

    #[test]
    fn test_render_yaml_minimal() {
        let fm = FrontMatter {
            title: "Release 3.0".to_string(),
            date: fixed_instant(),
            author: None,
            draft: true,
            tags: None,
        };
        let rendered = fm.render(FrontMatterFormat::Yaml).unwrap();

        assert!(!rendered.contains("author"));
        assert!(!rendered.contains("tags"));
        let parsed: FrontMatter = serde_yaml::from_str(yaml_header(&rendered)).unwrap();
        assert_eq!(parsed.author, None);
        assert_eq!(parsed.tags, None);
    }

    #[test]
    fn test_render_toml() {
        let fm = release_front_matter();
        let rendered = fm.render(FrontMatterFormat::Toml).unwrap();

        assert!(rendered.starts_with("+++\n"));
        assert!(rendered.ends_with("+++\n"));
        assert!(rendered.contains(r#"title = "Release 3.0""#));
        assert!(rendered.contains(r#"date = "2024-04-22T10:30:00Z""#));
        assert!(rendered.contains(r#"author = "Óscar Otero""#));
        assert!(rendered.contains("draft = true"));
        assert!(rendered.contains("Releases"));
    }

    #[test]
    fn test_format_from_config() {
        #[derive(Deserialize)]
        struct Holder {
            format: FrontMatterFormat,
        }

        let holder: Holder = toml::from_str(r#"format = "toml""#).unwrap();
        assert_eq!(holder.format, FrontMatterFormat::Toml);
        let holder: Holder = toml::from_str(r#"format = "yaml""#).unwrap();
        assert_eq!(holder.format, FrontMatterFormat::Yaml);
    }
}
