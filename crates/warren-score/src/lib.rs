//! Buffett score criteria and scorer for Uncle Warren.
//!
//! This crate provides the scoring rules, one per Buffett principle:
//! - Value: P/E below 35, cheaper is better
//! - Growth: EPS growth above 10%
//! - Quality: ROE above 15%, wide profit margins as a moat proxy
//! - Balance: low debt to equity
//!
//! Each criterion is worth 20 points by default; [`BuffettScorer`] sums them
//! into a score between 0 and 100 and maps it onto a verdict.
//!
//! # Example
//!
//! ```ignore
//! use warren_score::{BuffettScorer, Explanation};
//!
//! let scorer = BuffettScorer::default();
//! let scored = scorer.score(metrics);
//! let explanation = Explanation::new(&scorer, &scored);
//! println!("{} {}: {}", scored.ticker(), scored.score(), explanation.summary);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod balance;
pub mod explain;
pub mod growth;
pub mod quality;
pub mod registry;
pub mod scorer;
pub mod value;

// Re-export key types
pub use explain::Explanation;
pub use registry::{CriterionCategory, CriterionInfo};
pub use scorer::{BuffettScorer, ScoringConfig};
