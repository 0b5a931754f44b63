//! Ranked reports for Uncle Warren.
//!
//! This crate turns a list of scored stocks into the three outputs of a
//! screening run:
//! - CSV: one row per stock, empty fields for missing metrics
//! - JSON: an array of the same rows, `null` for missing metrics
//! - Text: a ranked, human-readable listing with a run summary
//!
//! # Example
//!
//! ```rust,ignore
//! use warren_report::{ReportConfig, Reporter};
//!
//! let reporter = Reporter::new(ReportConfig::default());
//! let bundle = reporter.generate(&scored, &skipped)?;
//! let written = reporter.write(&bundle)?;
//! ```

mod config;
mod error;
mod reporter;
mod summary;
mod text;

pub use config::{DEFAULT_CSV_FILE, DEFAULT_JSON_FILE, DEFAULT_TEXT_FILE, ReportConfig};
pub use error::ReportError;
pub use reporter::{CSV_COLUMNS, ReportBundle, Reporter, WrittenReport};
pub use summary::{RunSummary, VerdictCount};

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
