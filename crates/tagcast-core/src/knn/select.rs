//! Linear scan and partial top-K selection

use std::cmp::Ordering;

use crate::catalog::{Catalog, CatalogEntry, TagSet};
use crate::similarity::jaccard_distance;

/// One scored catalog entry, borrowed from the catalog it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour<'a> {
    /// Position of the entry in the catalog
    pub index: usize,
    /// Jaccard distance to the query, in [0, 1]
    pub distance: f64,
    pub entry: &'a CatalogEntry,
}

/// Score every catalog entry against the query tags, in catalog order
pub(crate) fn scan<'a>(catalog: &'a Catalog, tags: &TagSet) -> Vec<Neighbour<'a>> {
    catalog
        .iter()
        .enumerate()
        .map(|(index, entry)| Neighbour {
            index,
            distance: jaccard_distance(tags, &entry.tags),
            entry,
        })
        .collect()
}

/// Ascending distance, ties broken by catalog position.
///
/// This is a total order, so unstable selection and sorting still give
/// the same result as a stable sort of the whole catalog.
fn nearest_first(a: &Neighbour<'_>, b: &Neighbour<'_>) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.index.cmp(&b.index))
}

/// Keep the `k` nearest candidates, ordered nearest first.
///
/// Partitions in expected O(N), then sorts only the surviving front `k`.
pub(crate) fn select_nearest(mut candidates: Vec<Neighbour<'_>>, k: usize) -> Vec<Neighbour<'_>> {
    if k == 0 {
        candidates.clear();
        return candidates;
    }

    if k < candidates.len() {
        candidates.select_nth_unstable_by(k - 1, nearest_first);
        candidates.truncate(k);
    }

    candidates.sort_unstable_by(nearest_first);
    candidates
}
