//! Human-readable output formatting for predict command

use crate::cli::Cli;
use tagcast_core::knn::Prediction;

/// Output in human-readable format
pub fn output_human(cli: &Cli, prediction: &Prediction<'_>) {
    let predicted = &prediction.predicted;
    println!(
        "Predicted -> Views:{} Likes:{} Comments:{}",
        predicted.views, predicted.likes, predicted.comments
    );

    if cli.quiet {
        return;
    }

    println!("Top {} neighbours:", prediction.k());
    for (rank, neighbour) in prediction.neighbours.iter().enumerate() {
        let entry = neighbour.entry;
        println!(
            "  {}. id={} dist={:.4} {} {} {}",
            rank + 1,
            entry.id,
            neighbour.distance,
            entry.views,
            entry.likes,
            entry.comments
        );
    }
}
