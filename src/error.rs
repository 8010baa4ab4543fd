//! Error taxonomy for the harness.

use std::io;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors surfaced to the caller; never retried, never silently corrected.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Malformed input, e.g. an empty dataset handed to a search.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// I/O failure while exporting results.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// CSV writer failure while exporting results.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// JSON serialization failure while exporting results.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
