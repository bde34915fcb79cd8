//! Delimited dataset loader
//!
//! Reads `id,tags,views,likes,comments` records into a [`Catalog`]. Malformed
//! rows are skipped here so the k-NN core only ever sees validated entries.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use super::{parse_tags, Catalog, CatalogEntry};
use crate::config::LoaderConfig;
use crate::error::{Result, TagcastError};
use crate::trace_time;

/// Minimum number of fields a usable record must carry
pub const MIN_FIELDS: usize = 5;

/// Load a catalog from a delimited file.
///
/// Fails with `DataSourceUnreadable` if the file cannot be opened and with
/// `EmptyDataset` if no usable rows remain after filtering.
pub fn load_catalog(path: &Path, config: &LoaderConfig) -> Result<Catalog> {
    let start = Instant::now();

    let file = File::open(path).map_err(|e| TagcastError::unreadable(path, e))?;
    let catalog = read_catalog(file, path, config)?;

    if catalog.is_empty() {
        return Err(TagcastError::EmptyDataset {
            dataset: path.display().to_string(),
        });
    }

    info!(
        path = %path.display(),
        loaded = catalog.len(),
        skipped = catalog.skipped(),
        "catalog_loaded"
    );
    trace_time!(start, "load_catalog");

    Ok(catalog)
}

/// Parse catalog records from any reader.
///
/// `source` is only used for error reporting. An empty result is not an
/// error at this level; [`load_catalog`] decides that.
pub fn read_catalog<R: Read>(reader: R, source: &Path, config: &LoaderConfig) -> Result<Catalog> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(config.delimiter_byte()?)
        .from_reader(reader);

    let mut entries = Vec::new();
    let mut skipped = 0usize;
    let mut first = true;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(TagcastError::unreadable(source, e)),
            Err(e) => {
                debug!(error = %e, "skipping unreadable row");
                skipped += 1;
                first = false;
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if first {
            first = false;
            if is_header(&record) {
                debug!(line, "skipping header row");
                continue;
            }
        }

        match parse_record(&record, config.tag_separator) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                debug!(line, reason, "skipping malformed row");
                skipped += 1;
            }
        }
    }

    Ok(Catalog::with_skipped(entries, skipped))
}

/// A leading record is a header when its first field does not start with a digit
fn is_header(record: &StringRecord) -> bool {
    record
        .get(0)
        .and_then(|field| field.chars().next())
        .is_none_or(|c| !c.is_ascii_digit())
}

fn parse_record(
    record: &StringRecord,
    tag_separator: char,
) -> std::result::Result<CatalogEntry, &'static str> {
    if record.len() < MIN_FIELDS {
        return Err("too few fields");
    }

    let id = &record[0];
    if id.is_empty() {
        return Err("empty id");
    }

    let views = parse_counter(&record[2]).ok_or("invalid views")?;
    let likes = parse_counter(&record[3]).ok_or("invalid likes")?;
    let comments = parse_counter(&record[4]).ok_or("invalid comments")?;

    Ok(CatalogEntry {
        id: id.to_string(),
        tags: parse_tags(&record[1], tag_separator),
        views,
        likes,
        comments,
    })
}

fn parse_counter(field: &str) -> Option<u64> {
    field.trim().parse::<u64>().ok()
}
