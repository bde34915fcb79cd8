//! Error types and exit codes for tagcast
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad K, empty query tags, bad flags)
//! - 3: Data error (unreadable or empty dataset, bad config)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad arguments (2)
    Usage = 2,
    /// Data error - unreadable or empty dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a catalog or answering a query
#[derive(Error, Debug)]
pub enum TagcastError {
    // Usage errors (exit code 2)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    // Data errors (exit code 3)
    #[error("cannot open dataset {path:?}: {reason}")]
    DataSourceUnreadable { path: PathBuf, reason: String },

    #[error("dataset is empty or malformed: {dataset}")]
    EmptyDataset { dataset: String },

    #[error("invalid config {key}: {value}")]
    InvalidConfig { key: String, value: String },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl TagcastError {
    /// Create an error for a dataset or config file that cannot be read
    pub fn unreadable(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        TagcastError::DataSourceUnreadable {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid configuration value
    pub fn invalid_config(key: &str, value: impl std::fmt::Display) -> Self {
        TagcastError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            TagcastError::InvalidArgument(_)
            | TagcastError::UnknownFormat(_)
            | TagcastError::DuplicateFormat => ExitCode::Usage,

            // Data errors
            TagcastError::DataSourceUnreadable { .. }
            | TagcastError::EmptyDataset { .. }
            | TagcastError::InvalidConfig { .. } => ExitCode::Data,

            // Generic failures
            TagcastError::Json(_)
            | TagcastError::Toml(_)
            | TagcastError::Other(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TagcastError::InvalidArgument(_) => "invalid_argument",
            TagcastError::UnknownFormat(_) => "unknown_format",
            TagcastError::DuplicateFormat => "duplicate_format",
            TagcastError::DataSourceUnreadable { .. } => "data_source_unreadable",
            TagcastError::EmptyDataset { .. } => "empty_dataset",
            TagcastError::InvalidConfig { .. } => "invalid_config",
            TagcastError::Json(_) => "json_error",
            TagcastError::Toml(_) => "toml_error",
            TagcastError::Other(_) => "other",
        }
    }
}

/// Result type alias for tagcast operations
pub type Result<T> = std::result::Result<T, TagcastError>;
