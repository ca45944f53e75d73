#![cfg(test)]

use chrono::{DateTime, TimeZone, Utc};

use crate::archetype::ArchetypePolicy;
use crate::front_matter::FrontMatter;

pub const SAMPLE_CONFIG: &str = include_str!("../postseed.toml");

pub const RELEASE_TITLE: &str = "Release 3.0";

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 22, 10, 30, 0).unwrap()
}

pub fn release_policy() -> ArchetypePolicy {
    ArchetypePolicy {
        author: Some("Óscar Otero".to_string()),
        tags: Some(vec!["Releases".to_string()]),
        ..Default::default()
    }
}

pub fn release_front_matter() -> FrontMatter {
    FrontMatter {
        title: RELEASE_TITLE.to_string(),
        date: fixed_instant(),
        author: Some("Óscar Otero".to_string()),
        draft: true,
        tags: Some(vec!["Releases".to_string()]),
    }
}
