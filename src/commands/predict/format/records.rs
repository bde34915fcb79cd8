//! Records output formatting for predict command

use tagcast_core::catalog::sorted;
use tagcast_core::knn::{Prediction, Query};
use tagcast_core::records::{escape_quotes, tags_field};

/// Output in records format
pub fn output_records(prediction: &Prediction<'_>, query: &Query) {
    println!(
        "H tagcast=1 records=1 k={} catalog={} query=\"{}\"",
        prediction.k(),
        prediction.catalog_size,
        escape_quotes(&sorted(query.tags()).join(";"))
    );

    let predicted = &prediction.predicted;
    println!(
        "P views={} likes={} comments={}",
        predicted.views, predicted.likes, predicted.comments
    );

    for (rank, n) in prediction.neighbours.iter().enumerate() {
        println!(
            "N {} \"{}\" {:.4} views={} likes={} comments={} tags={}",
            rank + 1,
            escape_quotes(&n.entry.id),
            n.distance,
            n.entry.views,
            n.entry.likes,
            n.entry.comments,
            tags_field(&n.entry.tags)
        );
    }
}
