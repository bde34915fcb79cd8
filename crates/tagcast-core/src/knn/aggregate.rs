use serde::Serialize;

use super::select::Neighbour;

/// Engagement counters, either raw or predicted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Engagement {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
}

/// Integer mean of each counter over the neighbours, truncating toward zero.
///
/// Sums are accumulated in `u128` so no realistic catalog can overflow.
/// An empty slice yields all zeros.
pub fn mean_engagement(neighbours: &[Neighbour<'_>]) -> Engagement {
    if neighbours.is_empty() {
        return Engagement::default();
    }

    let (views, likes, comments) =
        neighbours
            .iter()
            .fold((0u128, 0u128, 0u128), |(v, l, c), n| {
                (
                    v + u128::from(n.entry.views),
                    l + u128::from(n.entry.likes),
                    c + u128::from(n.entry.comments),
                )
            });

    let count = neighbours.len() as u128;

    // A mean never exceeds the largest summand, so it always fits in u64
    Engagement {
        views: (views / count) as u64,
        likes: (likes / count) as u64,
        comments: (comments / count) as u64,
    }
}
