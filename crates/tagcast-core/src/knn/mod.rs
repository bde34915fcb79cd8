//! k-nearest-neighbour engagement prediction
//!
//! Every query is a full linear scan of the catalog: each entry is scored
//! with the Jaccard distance, the `k` nearest are partially selected and
//! sorted, and their engagement counters are averaged.

mod aggregate;
mod query;
mod select;

pub use aggregate::{mean_engagement, Engagement};
pub use query::Query;
pub use select::Neighbour;

use std::time::Instant;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, TagcastError};
use crate::trace_time;

/// Result of one query: averaged engagement plus the ranked neighbours used
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction<'a> {
    /// Floor mean of each counter over `neighbours`
    pub predicted: Engagement,
    /// Nearest entries, ascending by distance, ties in catalog order
    pub neighbours: Vec<Neighbour<'a>>,
    /// K as requested, before clamping
    pub requested_k: usize,
    /// Number of entries that were scanned
    pub catalog_size: usize,
}

impl Prediction<'_> {
    /// Effective K after clamping to the catalog size
    pub fn k(&self) -> usize {
        self.neighbours.len()
    }
}

/// Predictor bound to a single read-only catalog
pub struct KnnPredictor<'a> {
    catalog: &'a Catalog,
}

impl<'a> KnnPredictor<'a> {
    /// Create a predictor; an empty catalog can never satisfy a query
    pub fn new(catalog: &'a Catalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(TagcastError::EmptyDataset {
                dataset: "catalog".to_string(),
            });
        }
        Ok(KnnPredictor { catalog })
    }

    /// Predict engagement for a query
    pub fn predict(&self, query: &Query) -> Prediction<'a> {
        let start = Instant::now();
        let k = query.k().min(self.catalog.len());

        let candidates = select::scan(self.catalog, query.tags());
        trace_time!(start, "scan", candidates = candidates.len());

        let neighbours = select::select_nearest(candidates, k);
        trace_time!(start, "select", k = k);

        let predicted = mean_engagement(&neighbours);
        trace_time!(start, "aggregate");
        debug!(
            catalog_size = self.catalog.len(),
            requested_k = query.k(),
            k,
            views = predicted.views,
            likes = predicted.likes,
            comments = predicted.comments,
            "prediction"
        );

        Prediction {
            predicted,
            neighbours,
            requested_k: query.k(),
            catalog_size: self.catalog.len(),
        }
    }
}

/// Predict engagement for `query` against `catalog`.
///
/// Fails with `EmptyDataset` before scanning if the catalog has no entries.
/// K larger than the catalog is clamped silently.
pub fn predict<'a>(catalog: &'a Catalog, query: &Query) -> Result<Prediction<'a>> {
    Ok(KnnPredictor::new(catalog)?.predict(query))
}

#[cfg(test)]
mod tests;
