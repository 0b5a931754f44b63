//! Finviz quote page client for Uncle Warren.
//!
//! This crate fetches the public Finviz quote page for a ticker and reads the
//! five fundamentals the scorer needs out of its snapshot table.
//!
//! # Usage
//!
//! ```rust,ignore
//! use warren_finviz::FinvizClient;
//! use warren_traits::MetricsSource;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FinvizClient::from_env()?;
//!     let metrics = client.fetch_symbol("KO").await?;
//!     println!("{} P/E {:?}", metrics.company_name, metrics.pe_ratio);
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! `WARREN_USER_AGENT` overrides the browser user agent sent to Finviz. It
//! may also be set in a `.env` file:
//!
//! ```bash
//! WARREN_USER_AGENT="Mozilla/5.0 (X11; Linux x86_64) ..."
//! ```

mod client;
mod error;
mod snapshot;

pub use client::{
    DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, FINVIZ_QUOTE_URL, FinvizClient, FinvizConfig,
    USER_AGENT_ENV,
};
pub use error::FinvizError;
pub use snapshot::{Snapshot, parse_metric};

/// Result type for Finviz operations.
pub type Result<T> = std::result::Result<T, FinvizError>;
