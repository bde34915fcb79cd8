//! Predict command: load the catalog, run the k-NN query, print the result

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use tagcast_core::catalog::load_catalog;
use tagcast_core::config::LoaderConfig;
use tagcast_core::error::Result;
use tagcast_core::knn::{predict, Query};

/// Execute the predict command
pub fn execute(
    cli: &Cli,
    config: &LoaderConfig,
    query: &Query,
    output_format: OutputFormat,
    start: Instant,
) -> Result<()> {
    let catalog = load_catalog(&cli.dataset, config)?;
    debug!(elapsed = ?start.elapsed(), entries = catalog.len(), "load_catalog");

    let prediction = predict(&catalog, query)?;
    debug!(elapsed = ?start.elapsed(), k = prediction.k(), "predict");

    match output_format {
        OutputFormat::Human => format::output_human(cli, &prediction),
        OutputFormat::Json => format::output_json(&prediction, query)?,
        OutputFormat::Records => format::output_records(&prediction, query),
    }

    Ok(())
}
