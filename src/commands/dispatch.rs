//! Command dispatch logic for tagcast
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::predict;
use tagcast_core::config::LoaderConfig;
use tagcast_core::error::Result;
use tagcast_core::knn::Query;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = LoaderConfig::load(cli.config.as_deref())?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    // Reject bad K or empty tags before touching the dataset
    let query = Query::parse(cli.k, &cli.tags, config.tag_separator)?;

    let format = cli.format.unwrap_or(config.default_format);
    predict::execute(cli, &config, &query, format, start)
}
