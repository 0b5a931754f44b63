//! Error responses for the web form.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use warren_traits::FetchError;

/// Why a ticker could not be analyzed.
#[derive(Debug, Error)]
pub enum WebError {
    /// Unknown, malformed or empty ticker.
    #[error("Could not find stock '{0}'. Please check the ticker symbol.")]
    NotFound(String),

    /// The data source failed for a reason other than an unknown ticker.
    #[error("Could not fetch data for '{ticker}' right now. Please try again later.")]
    Unavailable {
        /// The ticker as entered, upper-cased.
        ticker: String,
        /// Underlying fetch failure.
        #[source]
        source: FetchError,
    },
}

impl WebError {
    /// Classify a fetch failure for the ticker the user typed.
    #[must_use]
    pub fn from_fetch(input: &str, err: FetchError) -> Self {
        let ticker = input.trim().to_uppercase();
        if err.is_not_found() {
            Self::NotFound(ticker)
        } else {
            Self::Unavailable {
                ticker,
                source: err,
            }
        }
    }

    /// HTTP status used by the JSON API.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": true,
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
