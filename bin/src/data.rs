//! Metrics sources for the Uncle Warren CLI.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use warren_finviz::FinvizClient;
use warren_traits::{FetchError, MetricsSource, StockMetrics, Ticker};

/// A curated stock with snapshot fundamentals.
struct Curated {
    symbol: &'static str,
    company: &'static str,
    pe_ratio: f64,
    eps_growth_pct: f64,
    roe_pct: f64,
    debt_to_equity: f64,
    profit_margin_pct: f64,
}

const fn curated(
    symbol: &'static str,
    company: &'static str,
    pe_ratio: f64,
    eps_growth_pct: f64,
    roe_pct: f64,
    debt_to_equity: f64,
    profit_margin_pct: f64,
) -> Curated {
    Curated {
        symbol,
        company,
        pe_ratio,
        eps_growth_pct,
        roe_pct,
        debt_to_equity,
        profit_margin_pct,
    }
}

/// Buffett holdings and quality compounders screened by default.
const UNIVERSE: [Curated; 12] = [
    curated("AAPL", "Apple Inc.", 28.5, 11.2, 147.0, 1.87, 25.3),
    curated("BAC", "Bank of America", 12.1, 12.5, 10.2, 1.08, 27.1),
    curated("AXP", "American Express", 18.9, 15.3, 33.4, 1.72, 15.8),
    curated("KO", "Coca-Cola Co", 23.2, 10.8, 42.3, 1.62, 23.4),
    curated("MCO", "Moody's Corporation", 32.4, 14.2, 58.7, 2.31, 32.1),
    curated("V", "Visa Inc.", 27.8, 16.9, 47.2, 0.52, 54.0),
    curated("MA", "Mastercard Inc.", 33.1, 18.4, 173.0, 2.08, 45.8),
    curated("JNJ", "Johnson & Johnson", 14.8, 11.5, 22.1, 0.44, 42.5),
    curated("PG", "Procter & Gamble", 24.6, 10.3, 32.4, 0.68, 18.2),
    curated("BRK.B", "Berkshire Hathaway", 9.8, 21.4, 15.8, 0.23, 15.2),
    curated("COST", "Costco Wholesale", 34.2, 13.8, 28.9, 0.35, 2.6),
    curated("UNH", "UnitedHealth Group", 18.2, 14.7, 25.3, 0.71, 5.9),
];

/// Symbols of the curated universe, in screening order.
pub(crate) fn default_tickers() -> Vec<String> {
    UNIVERSE.iter().map(|c| c.symbol.to_string()).collect()
}

/// Offline source serving the curated snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CuratedSource;

#[async_trait]
impl MetricsSource for CuratedSource {
    fn name(&self) -> &str {
        "curated"
    }

    async fn fetch(&self, ticker: &Ticker) -> warren_traits::Result<StockMetrics> {
        let entry = UNIVERSE
            .iter()
            .find(|c| c.symbol == ticker.as_str())
            .ok_or_else(|| FetchError::NotFound(ticker.to_string()))?;
        debug!(ticker = %ticker, "Serving curated snapshot");

        Ok(StockMetrics::new(ticker.clone(), entry.company)
            .with_pe_ratio(entry.pe_ratio)
            .with_eps_growth_pct(entry.eps_growth_pct)
            .with_roe_pct(entry.roe_pct)
            .with_debt_to_equity(entry.debt_to_equity)
            .with_profit_margin_pct(entry.profit_margin_pct))
    }
}

/// Curated snapshot when offline, Finviz otherwise.
pub(crate) fn metrics_source(offline: bool) -> Result<Arc<dyn MetricsSource>> {
    if offline {
        Ok(Arc::new(CuratedSource))
    } else {
        Ok(Arc::new(FinvizClient::from_env()?))
    }
}
