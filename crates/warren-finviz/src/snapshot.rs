//! Parsing of the Finviz quote page.
//!
//! The fundamentals live in `table.snapshot-table2`, laid out as alternating
//! label and value cells (`P/E | 28.50 | EPS next 5Y | 11.20% | ...`).

use crate::{Result, error::FinvizError};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;
use warren_traits::{StockMetrics, Ticker};

const SNAPSHOT_TABLE: &str = "table.snapshot-table2";
const ROW: &str = "tr";
const CELL: &str = "td";
const COMPANY_LINK: &str = "a.tab-link";
const CONTENT: &str = "div.content";

/// Snapshot labels read for each metric, preferred label first.
const PE_LABELS: [&str; 2] = ["P/E", "Forward P/E"];
const EPS_GROWTH_LABELS: [&str; 2] = ["EPS next 5Y", "EPS past 5Y"];
const ROE_LABELS: [&str; 1] = ["ROE"];
const DEBT_EQUITY_LABELS: [&str; 1] = ["Debt/Eq"];
const PROFIT_MARGIN_LABELS: [&str; 1] = ["Profit Margin"];

fn selector(css: &'static str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| FinvizError::Selector(css))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Raw label/value pairs scraped from a quote page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Requested ticker
    pub ticker: Ticker,
    /// Company name from the page header, or the ticker if absent
    pub company_name: String,
    /// Snapshot table cells, label to raw value
    pub fields: HashMap<String, String>,
}

impl Snapshot {
    /// Parse a quote page.
    ///
    /// # Errors
    ///
    /// Returns [`FinvizError::SymbolNotFound`] for Finviz's "not found" page
    /// and [`FinvizError::MissingSnapshot`] if the fundamentals table is absent.
    pub fn parse(ticker: &Ticker, html: &str) -> Result<Self> {
        let document = Html::parse_document(html);

        let not_found = document
            .select(&selector(CONTENT)?)
            .any(|div| text_of(div).to_lowercase().contains("not found"));
        if not_found {
            return Err(FinvizError::SymbolNotFound(ticker.to_string()));
        }

        let table = document
            .select(&selector(SNAPSHOT_TABLE)?)
            .next()
            .ok_or_else(|| FinvizError::MissingSnapshot(ticker.to_string()))?;

        let company_name = document
            .select(&selector(COMPANY_LINK)?)
            .next()
            .map(text_of)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| ticker.to_string());

        let cell = selector(CELL)?;
        let mut fields = HashMap::new();
        for row in table.select(&selector(ROW)?) {
            let cells: Vec<String> = row.select(&cell).map(text_of).collect();
            for pair in cells.chunks_exact(2) {
                fields.insert(pair[0].clone(), pair[1].clone());
            }
        }
        debug!(ticker = %ticker, fields = fields.len(), "Parsed Finviz snapshot");

        Ok(Self {
            ticker: ticker.clone(),
            company_name,
            fields,
        })
    }

    /// Numeric value of the first label present with a parseable value.
    #[must_use]
    pub fn value(&self, labels: &[&str]) -> Option<f64> {
        labels
            .iter()
            .find_map(|label| self.fields.get(*label).and_then(|raw| parse_metric(raw)))
    }

    /// Map the snapshot onto the screener's metrics.
    ///
    /// Falls back to forward P/E when trailing P/E is missing, and to past
    /// five-year EPS growth when the estimate is missing.
    #[must_use]
    pub fn into_metrics(self) -> StockMetrics {
        StockMetrics {
            pe_ratio: self.value(&PE_LABELS),
            eps_growth_pct: self.value(&EPS_GROWTH_LABELS),
            roe_pct: self.value(&ROE_LABELS),
            debt_to_equity: self.value(&DEBT_EQUITY_LABELS),
            profit_margin_pct: self.value(&PROFIT_MARGIN_LABELS),
            ticker: self.ticker,
            company_name: self.company_name,
        }
    }
}

/// Parse a Finviz cell value such as `28.50`, `11.20%` or `1,234.5`.
///
/// `-`, blanks and anything unparseable are treated as missing.
#[must_use]
pub fn parse_metric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != '%' && *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}
