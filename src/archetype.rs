use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::ArchetypeError;
use crate::front_matter::FrontMatter;
use crate::slug::slugify;

/// What to do when a title slugifies to nothing but hyphens (or nothing at all).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySlugPolicy {
    /// Keep the degenerate slug, e.g. `posts/.md`
    #[default]
    Allow,
    /// Refuse the title
    Reject,
    /// Use the slug of the given text instead
    Placeholder(String),
}

/// Static content-type policy of an archetype. Nothing in here is computed per post.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArchetypePolicy {
    pub section: String,
    pub extension: String,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
    pub empty_slug: EmptySlugPolicy,
}

impl Default for ArchetypePolicy {
    fn default() -> Self {
        ArchetypePolicy {
            section: "posts".to_string(),
            extension: "md".to_string(),
            author: None,
            tags: None,
            empty_slug: EmptySlugPolicy::Allow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedFile {
    /// Relative, always `/` separated
    pub path: String,
    pub content: FrontMatter,
}

impl GeneratedFile {
    pub fn relative_path(&self) -> PathBuf {
        self.path.split('/').collect()
    }
}

fn is_degenerate(slug: &str) -> bool {
    slug.chars().all(|c| c == '-')
}

pub struct Archetype<C: Clock = SystemClock> {
    policy: ArchetypePolicy,
    clock: C,
}

impl Archetype<SystemClock> {
    pub fn new(policy: ArchetypePolicy) -> Self {
        Archetype { policy, clock: SystemClock }
    }
}

impl<C: Clock> Archetype<C> {
    pub fn with_clock(policy: ArchetypePolicy, clock: C) -> Self {
        Archetype { policy, clock }
    }

    pub fn policy(&self) -> &ArchetypePolicy {
        &self.policy
    }

    /// Derives the path and default front matter of a new post.
    /// Total over every title: degenerate slugs are passed through untouched.
    pub fn generate(&self, title: &str) -> GeneratedFile {
        self.build(title, &slugify(title))
    }

    /// Same as [`Archetype::generate`], but applies the configured [`EmptySlugPolicy`].
    pub fn generate_checked(&self, title: &str) -> Result<GeneratedFile, ArchetypeError> {
        let slug = slugify(title);
        if !is_degenerate(&slug) {
            return Ok(self.build(title, &slug));
        }

        match self.policy.empty_slug {
            EmptySlugPolicy::Allow => Ok(self.build(title, &slug)),
            EmptySlugPolicy::Reject => Err(ArchetypeError::EmptySlug { title: title.to_string() }),
            EmptySlugPolicy::Placeholder(ref placeholder) => Ok(self.build(title, &slugify(placeholder))),
        }
    }

    fn build(&self, title: &str, slug: &str) -> GeneratedFile {
        let path = format!("{}/{}.{}", self.policy.section, slug, self.policy.extension);
        let content = FrontMatter {
            title: title.to_string(),
            date: self.clock.now(),
            author: self.policy.author.clone(),
            draft: true,
            tags: self.policy.tags.clone(),
        };

        GeneratedFile { path, content }
    }
}
