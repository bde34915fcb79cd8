//! Tagcast - predict short-form video engagement from content tags
//!
//! Averages the engagement of the K catalog videos whose tag sets are
//! closest (by Jaccard distance) to the query tags.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::parse::{json_requested, parse_failure};
use cli::{Cli, OutputFormat};
use tagcast_core::error::{ExitCode as TagcastExitCode, TagcastError};
use tagcast_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return report_parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(TagcastExitCode::Success),
        Err(e) => {
            // --quiet trims the neighbour listing only; failures always explain themselves
            report(&e, cli.format == Some(OutputFormat::Json));
            exit_with(e.exit_code())
        }
    }
}

/// Handle a clap failure. Without `--format json` on argv clap prints and exits itself.
fn report_parse_failure(err: clap::Error) -> ExitCode {
    let argv = env::args_os().skip(1).filter_map(|arg| arg.into_string().ok());
    if !json_requested(argv) {
        err.exit();
    }

    match parse_failure(&err) {
        Some(e) => {
            report(&e, true);
            exit_with(e.exit_code())
        }
        // help and version are not failures
        None => err.exit(),
    }
}

fn report(err: &TagcastError, json: bool) {
    if json {
        eprintln!("{}", err.to_json());
    } else {
        eprintln!("error: {}", err);
    }
}

fn exit_with(code: TagcastExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}
