//! The read-only video catalog searched by every query

mod entry;
pub mod loader;

pub use entry::{parse_tags, sorted, CatalogEntry, TagSet};
pub use loader::load_catalog;

/// Fixed, ordered collection of catalog entries.
///
/// Built once and never mutated; entries are only handed out as a shared
/// slice, so one catalog can back any number of queries (including
/// concurrent ones) without locking.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    skipped: usize,
}

impl Catalog {
    /// Create a catalog from already-validated entries
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Catalog {
            entries,
            skipped: 0,
        }
    }

    pub(crate) fn with_skipped(entries: Vec<CatalogEntry>, skipped: usize) -> Self {
        Catalog { entries, skipped }
    }

    /// All entries in source order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    /// Number of source rows the loader discarded as malformed
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<T: IntoIterator<Item = CatalogEntry>>(iter: T) -> Self {
        Catalog::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
