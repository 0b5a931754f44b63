//! Error types for the Uncle Warren screener.
//!
//! Fetch failures are recoverable by design of the batch run: a ticker that
//! cannot be fetched is skipped and reported, never fatal.

use thiserror::Error;

/// Errors a [`MetricsSource`](crate::MetricsSource) can return for a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The ticker symbol is empty or contains unsupported characters.
    #[error("Invalid ticker symbol: '{0}'")]
    InvalidTicker(String),

    /// The data source has no page or record for this ticker.
    #[error("Ticker not found: {0}")]
    NotFound(String),

    /// The request failed before a usable response arrived.
    #[error("Data fetch error: {0}")]
    Transport(String),

    /// A response arrived but could not be interpreted.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The data source throttled the request.
    #[error("Rate limit exceeded")]
    RateLimited,
}

impl FetchError {
    /// Whether this error means the ticker does not exist (as opposed to the
    /// source being unreachable or returning garbage).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::InvalidTicker(_) | Self::NotFound(_))
    }
}

/// A specialized Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FetchError::NotFound("ZZZZ".to_string());
        assert_eq!(err.to_string(), "Ticker not found: ZZZZ");

        let err = FetchError::InvalidTicker("$$".to_string());
        assert_eq!(err.to_string(), "Invalid ticker symbol: '$$'");

        let err = FetchError::Transport("connection reset".to_string());
        assert_eq!(err.to_string(), "Data fetch error: connection reset");
    }

    #[test]
    fn test_is_not_found() {
        assert!(FetchError::NotFound("X".to_string()).is_not_found());
        assert!(FetchError::InvalidTicker(String::new()).is_not_found());
        assert!(!FetchError::Transport("timeout".to_string()).is_not_found());
        assert!(!FetchError::RateLimited.is_not_found());
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(FetchError::Parse("bad html".to_string()));
        assert!(err_result.is_err());
    }
}
