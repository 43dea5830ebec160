//! Slug generation utilities for human-readable group identifiers.
//!
//! ## Summary
//! Generates stable, URL-safe slugs from group names. Slugs are lowercase,
//! alphanumeric with hyphens, and don't change even if the group name changes.
//! When a derived slug is already taken, numeric suffixes (`-2`, `-3`, ...)
//! are tried in order and the lowest free one wins.

use std::collections::HashSet;
use std::fmt;

use crate::constants::{FALLBACK_SLUG_BASE, MAX_SLUG_SUFFIX};

/// Generate a URL-safe slug from a name.
///
/// Transliterates non-ASCII letters, converts to lowercase, replaces spaces
/// and special characters with hyphens, collapses multiple hyphens, and trims
/// edge hyphens.
///
/// Examples:
/// - "Slug Group" -> "slug-group"
/// - "SF iOS Coffee ☕" -> "sf-ios-coffee"
/// - "Café Rust" -> "cafe-rust"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    let slug = transliterate(name)
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    // If slug is a valid uuid, prepend "res-" so it can't shadow an id lookup
    if uuid::Uuid::parse_str(&slug).is_ok() {
        format!("res-{slug}")
    } else {
        slug
    }
}

/// Replaces non-ASCII letters and digits with their ASCII spelling. Symbols
/// and emoji become separators rather than words.
fn transliterate(name: &str) -> String {
    let mut ascii = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii() {
            ascii.push(c);
        } else if c.is_alphanumeric() {
            ascii.push_str(deunicode::deunicode_char(c).unwrap_or("-"));
        } else {
            ascii.push('-');
        }
    }
    ascii
}

/// Returns `true` if `value` is a well-formed slug: non-empty, lowercase ASCII
/// alphanumerics separated by single hyphens.
#[must_use]
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// A validated, URL-safe group slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    /// ## Summary
    /// Derives the base slug for a group name.
    ///
    /// Names without any letters or digits fall back to `"group"` so the
    /// result is never empty.
    #[must_use]
    pub fn derive(name: &str) -> Self {
        let slug = generate_slug(name);
        if slug.is_empty() {
            Self(FALLBACK_SLUG_BASE.to_string())
        } else {
            Self(slug)
        }
    }

    /// Wraps an existing slug, rejecting malformed values.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        is_valid_slug(value).then(|| Self(value.to_string()))
    }

    /// The disambiguated form `"{base}-{n}"`.
    #[must_use]
    pub fn with_suffix(&self, n: u32) -> Self {
        Self(format!("{}-{n}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// ## Summary
/// Picks the first slug not present in `taken`: `base` itself, then
/// `base-2`, `base-3`, ... up to `base-{MAX_SLUG_SUFFIX}`.
///
/// Returns `None` once every candidate is taken.
#[must_use]
pub fn next_available_slug(base: &Slug, taken: &HashSet<String>) -> Option<Slug> {
    if !taken.contains(base.as_str()) {
        return Some(base.clone());
    }

    (2..=MAX_SLUG_SUFFIX)
        .map(|n| base.with_suffix(n))
        .find(|candidate| !taken.contains(candidate.as_str()))
}
