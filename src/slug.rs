use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Collapses every run of whitespace into a single `-` and lower-cases the result.
/// Punctuation is kept as is, so `Release 3.0` becomes `release-3.0`.
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN.replace_all(title, "-").to_lowercase()
}
