//! CLI argument parsing for tagcast
//!
//! Three positionals (K, dataset path, query tags), plus flags for output
//! format, config and logging.

pub mod parse;

use clap::Parser;
use std::path::PathBuf;

use parse::parse_output_format;
pub use tagcast_core::format::OutputFormat;

/// Tagcast - predict video engagement from content tags
#[derive(Parser, Debug)]
#[command(name = "tagcast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of nearest neighbours to average (positive integer)
    #[arg(allow_negative_numbers = true)]
    pub k: i64,

    /// Dataset file with id,tags,views,likes,comments records
    pub dataset: PathBuf,

    /// Query tags separated by ';' (e.g. "dance;funny")
    pub tags: String,

    /// Output format: human, json or records [default: from config, else human]
    #[arg(long, value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to ~/.config/tagcast/config.toml)
    #[arg(long, env = "TAGCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only print the prediction summary
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "info", "tagcast_core=trace")
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,
}
