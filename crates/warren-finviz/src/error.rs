//! Error types for the Finviz client.

use thiserror::Error;
use warren_traits::FetchError;

/// Errors that can occur when scraping Finviz.
#[derive(Debug, Error)]
pub enum FinvizError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Finviz answered with a non-success status.
    #[error("Finviz returned HTTP {status} for {ticker}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested ticker.
        ticker: String,
    },

    /// Rate limit exceeded.
    #[error("Rate limit exceeded. Slow down requests to Finviz.")]
    RateLimitExceeded,

    /// Symbol not found.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The quote page has no fundamentals table.
    #[error("No snapshot table on the quote page for {0}")]
    MissingSnapshot(String),

    /// A CSS selector failed to compile.
    #[error("Invalid selector '{0}'")]
    Selector(&'static str),
}

impl From<FinvizError> for FetchError {
    fn from(err: FinvizError) -> Self {
        match err {
            FinvizError::SymbolNotFound(ticker) => Self::NotFound(ticker),
            FinvizError::Status { status: 404, ticker } => Self::NotFound(ticker),
            FinvizError::RateLimitExceeded => Self::RateLimited,
            FinvizError::MissingSnapshot(_) | FinvizError::Selector(_) => Self::Parse(err.to_string()),
            FinvizError::Request(_) | FinvizError::Status { .. } => Self::Transport(err.to_string()),
        }
    }
}
