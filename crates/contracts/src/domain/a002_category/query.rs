use serde::{Deserialize, Serialize};

/// The category label a name list is fetched for.
///
/// Built from a URL path segment: `"elf-names"` becomes `"Elf Names"`.
/// An empty label cannot be constructed, so holding a `CategoryQuery` means a
/// request may be issued.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryQuery(String);

/// Token that asks the server for an unfiltered list.
pub const ALL_CATEGORIES: &str = "all";

impl CategoryQuery {
    /// Label from free text. Whitespace-only input yields `None`.
    pub fn new(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Label from a URL slug: hyphens become spaces, every word is title-cased.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::new(&title_case(&slug.replace('-', " ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_all(&self) -> bool {
        self.0.eq_ignore_ascii_case(ALL_CATEGORIES)
    }

    pub fn to_slug(&self) -> String {
        slugify(&self.0)
    }
}

impl std::fmt::Display for CategoryQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase the first character of every word, leaving the rest untouched.
/// A word starts at any alphanumeric character that follows a
/// non-alphanumeric one.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_word = false;
    for ch in text.chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

/// `"Elf Names"` → `"elf-names"`.
pub fn slugify(label: &str) -> String {
    label
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
