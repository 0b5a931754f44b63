#![doc(issue_tracker_base_url = "https://github.com/factordynamics/uncle-warren/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and trait definitions for the Uncle Warren stock screener.
//!
//! This crate provides the data model shared by every other crate: the
//! fetched [`StockMetrics`] of a company, the [`ScoredStock`] produced by the
//! scorer, the [`Criterion`] scoring rule, and the [`MetricsSource`] fetcher.

/// The version of the warren-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod criterion;
pub mod error;
pub mod source;
pub mod types;

// Re-exports
pub use criterion::{Criterion, Observation, finite, format_metric};
pub use error::{FetchError, Result};
pub use source::MetricsSource;
pub use types::{CriterionScore, ScoredStock, StockMetrics, Ticker, Verdict};
