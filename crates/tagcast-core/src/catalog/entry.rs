//! Catalog entry types

use std::collections::HashSet;

/// Set of case-sensitive content tags
pub type TagSet = HashSet<String>;

/// A single video record in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Content tags
    pub tags: TagSet,
    /// View count
    pub views: u64,
    /// Like count
    pub likes: u64,
    /// Comment count
    pub comments: u64,
}

impl CatalogEntry {
    /// Create a new catalog entry
    pub fn new<I, S>(id: impl Into<String>, tags: I, views: u64, likes: u64, comments: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CatalogEntry {
            id: id.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            views,
            likes,
            comments,
        }
    }

    /// Tags in lexical order, for stable display
    pub fn sorted_tags(&self) -> Vec<&str> {
        sorted(&self.tags)
    }
}

/// Split a separator-delimited tag string into a tag set.
///
/// Empty fragments are dropped; tags are neither trimmed nor case-folded.
pub fn parse_tags(raw: &str, separator: char) -> TagSet {
    raw.split(separator)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tags of a set in lexical order
pub fn sorted(tags: &TagSet) -> Vec<&str> {
    let mut out: Vec<&str> = tags.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}
