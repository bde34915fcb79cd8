//! Similarity engine for comparing tag sets

use crate::catalog::TagSet;

/// Jaccard distance between two tag sets: `1 - |A ∩ B| / |A ∪ B|`
///
/// Returns 0.0 for identical sets and 1.0 for disjoint ones. Two empty sets
/// are treated as a perfect match (0.0) so every catalog entry always has a
/// finite distance.
///
/// Iterates the smaller set and probes the larger one, so the cost is
/// O(min(|A|, |B|)).
pub fn jaccard_distance(a: &TagSet, b: &TagSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|tag| large.contains(*tag)).count();
    let union = a.len() + b.len() - intersection;

    1.0 - intersection as f64 / union as f64
}
