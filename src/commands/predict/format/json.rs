//! JSON output formatting for predict command

use tagcast_core::catalog::sorted;
use tagcast_core::error::Result;
use tagcast_core::knn::{Prediction, Query};

/// Output in JSON format
pub fn output_json(prediction: &Prediction<'_>, query: &Query) -> Result<()> {
    let neighbours: Vec<_> = prediction
        .neighbours
        .iter()
        .enumerate()
        .map(|(rank, n)| {
            serde_json::json!({
                "rank": rank + 1,
                "id": n.entry.id,
                "distance": n.distance,
                "tags": n.entry.sorted_tags(),
                "views": n.entry.views,
                "likes": n.entry.likes,
                "comments": n.entry.comments,
            })
        })
        .collect();

    let output = serde_json::json!({
        "k": prediction.k(),
        "requested_k": prediction.requested_k,
        "catalog_size": prediction.catalog_size,
        "query_tags": sorted(query.tags()),
        "predicted": prediction.predicted,
        "neighbours": neighbours,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
