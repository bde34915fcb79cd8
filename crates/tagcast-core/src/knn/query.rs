use crate::bail_invalid;
use crate::catalog::{parse_tags, TagSet};
use crate::error::Result;

/// A validated prediction request.
///
/// Construction guarantees a non-empty tag set and `k >= 1`, so the
/// selector never has to re-check either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    tags: TagSet,
    k: usize,
}

impl Query {
    /// Build a query from an already-split tag set
    pub fn new(tags: TagSet, k: usize) -> Result<Self> {
        if k == 0 {
            bail_invalid!("K must be positive");
        }
        if tags.is_empty() {
            bail_invalid!("provide at least one tag for the query");
        }
        Ok(Query { tags, k })
    }

    /// Parse a raw K value and a separator-delimited tag string.
    ///
    /// K is taken signed so that zero and negative input from the command
    /// line are reported as invalid arguments rather than parse failures.
    pub fn parse(k: i64, raw_tags: &str, separator: char) -> Result<Self> {
        if k <= 0 {
            bail_invalid!("K must be positive, got {}", k);
        }
        let Ok(k) = usize::try_from(k) else {
            bail_invalid!("K is too large: {}", k);
        };
        Self::new(parse_tags(raw_tags, separator), k)
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Requested neighbour count, before clamping to the catalog size
    pub fn k(&self) -> usize {
        self.k
    }
}
