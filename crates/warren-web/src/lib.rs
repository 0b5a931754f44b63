//! Single-ticker web form for Uncle Warren.
//!
//! An axum [`Router`](axum::Router) serving:
//! - `GET /` - the ticker form
//! - `GET /analyze?ticker=KO` - the HTML result page
//! - `GET /api/analyze/KO` - the same analysis as JSON
//! - `GET /health` - liveness check
//!
//! Unknown or malformed tickers never fail the request: the HTML page shows
//! a "Could not find stock" message and the API answers with
//! `{"error": true, "message": ...}`.

mod analysis;
mod error;
mod html;
mod routes;

pub use analysis::Analysis;
pub use error::WebError;
pub use routes::{AppState, build_router};
