//! Data source trait for fetching fundamental metrics.

use crate::{Result, StockMetrics, Ticker};
use async_trait::async_trait;

/// A provider of fundamental metrics for a ticker.
///
/// Implementations may block on the network. Errors are per ticker: callers
/// running a batch skip the ticker and carry on.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Short name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetch the metrics for one ticker.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`](crate::FetchError) if the ticker is unknown to
    /// the source or the source cannot be reached or parsed.
    async fn fetch(&self, ticker: &Ticker) -> Result<StockMetrics>;

    /// Validate a raw symbol and fetch its metrics.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidTicker`](crate::FetchError::InvalidTicker)
    /// for malformed input, otherwise whatever [`MetricsSource::fetch`] returns.
    async fn fetch_symbol(&self, raw: &str) -> Result<StockMetrics> {
        let ticker = Ticker::parse(raw)?;
        self.fetch(&ticker).await
    }
}
