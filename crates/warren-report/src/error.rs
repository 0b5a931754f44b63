//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// CSV serialization failed.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An output file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// File or directory being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
