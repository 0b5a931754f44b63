#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/uncle-warren/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # warren
//!
//! Umbrella crate re-exporting the Uncle Warren sub-crates.
//!
//! ## Quick Start
//!
//! ```ignore
//! use warren::prelude::*;
//! use warren::finviz::FinvizClient;
//! use warren::report::{ReportConfig, Reporter};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FinvizClient::from_env()?;
//! let scorer = BuffettScorer::default();
//!
//! let mut scored = Vec::new();
//! for symbol in ["KO", "AAPL", "BRK.B"] {
//!     scored.push(scorer.score(client.fetch_symbol(symbol).await?));
//! }
//!
//! let reporter = Reporter::new(ReportConfig::default());
//! let bundle = reporter.generate(&scored, &[])?;
//! reporter.write(&bundle)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Data model, the [`Criterion`] and [`MetricsSource`] traits
//! - [`score`] - The five criteria and the [`BuffettScorer`]
//! - [`report`] - CSV, JSON and text reports
//! - [`finviz`] - Finviz quote page client
//! - [`web`] - Single-ticker web form
//!
//! ## Pipeline
//!
//! 1. A **source** fetches [`StockMetrics`] for each ticker
//! 2. The **scorer** turns metrics into a [`ScoredStock`] with a [`Verdict`]
//! 3. The **reporter** ranks the scored stocks and writes the three files

/// Version information for the warren crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Core Traits
// ============================================================================

/// Data model and core traits.
pub mod traits {
    pub use warren_traits::*;
}

pub use warren_traits::{Criterion, MetricsSource};
pub use warren_traits::{FetchError, Result};
pub use warren_traits::{CriterionScore, ScoredStock, StockMetrics, Ticker, Verdict};

// ============================================================================
// Scoring
// ============================================================================

/// Buffett criteria and the scorer.
///
/// Five criteria worth 20 points each:
///
/// - **Valuation**: P/E below 35, scaled linearly
/// - **Earnings growth**: EPS growth, full marks from 10%
/// - **Return on equity**: full marks from 15%
/// - **Leverage**: debt/equity, full marks up to 0.5, none from 2.0
/// - **Profit margin**: full marks from 20%
///
/// # Example
///
/// ```ignore
/// use warren::score::{BuffettScorer, Explanation};
///
/// let scorer = BuffettScorer::default();
/// let scored = scorer.score(metrics);
/// let why = Explanation::new(&scorer, &scored);
/// println!("{}/100 {} - {}", scored.score(), scored.verdict(), why.summary);
/// ```
pub mod score {
    pub use warren_score::*;
}

pub use warren_score::{BuffettScorer, Explanation, ScoringConfig};

// ============================================================================
// Reporting
// ============================================================================

/// Ranked CSV, JSON and text reports.
pub mod report {
    pub use warren_report::*;
}

// ============================================================================
// Data Sources
// ============================================================================

/// Finviz quote page client.
///
/// Set `WARREN_USER_AGENT` to override the browser user agent.
pub mod finviz {
    pub use warren_finviz::*;
}

// ============================================================================
// Web
// ============================================================================

/// Single-ticker web form.
pub mod web {
    pub use warren_web::*;
}

// ============================================================================
// Prelude
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```ignore
/// use warren::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{BuffettScorer, Criterion, MetricsSource};
    pub use crate::{CriterionScore, ScoredStock, StockMetrics, Ticker, Verdict};
    pub use crate::{FetchError, Result};
}

// ============================================================================
// Tests
// ============================================================================
