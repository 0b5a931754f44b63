//! Common types used throughout the Uncle Warren screener.
//!
//! This module defines the ticker symbol, the fetched fundamental metrics of a
//! company, and the scored record produced from them.

use crate::{FetchError, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Longest ticker symbol accepted.
pub const MAX_TICKER_LEN: usize = 10;

/// A validated stock exchange symbol.
///
/// Tickers are stored upper-cased and trimmed. Class shares keep their
/// separator, so `brk.b` becomes `BRK.B`.
///
/// # Example
///
/// ```
/// use warren_traits::Ticker;
///
/// let ticker = Ticker::parse(" brk.b ").unwrap();
/// assert_eq!(ticker.as_str(), "BRK.B");
/// assert!(Ticker::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct Ticker(String);

impl Ticker {
    /// Parse and normalize a raw ticker symbol.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidTicker`] if the symbol is empty, longer
    /// than [`MAX_TICKER_LEN`], or contains characters other than ASCII
    /// letters, digits, `.` and `-`.
    pub fn parse(raw: &str) -> Result<Self> {
        let symbol = raw.trim().to_ascii_uppercase();

        let starts_alphanumeric = symbol
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        let valid_chars = symbol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');

        if !starts_alphanumeric || !valid_chars || symbol.len() > MAX_TICKER_LEN {
            return Err(FetchError::InvalidTicker(raw.trim().to_string()));
        }

        Ok(Self(symbol))
    }

    /// The normalized symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Ticker {
    type Error = FetchError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Fundamental metrics for one company, as fetched from a data source.
///
/// Every numeric field is optional. An absent value means the source did not
/// report it (for example, no P/E when earnings are negative); the scorer
/// awards zero points for the criterion that uses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMetrics {
    /// Exchange symbol, the unique key of a record.
    pub ticker: Ticker,
    /// Company name as reported by the source.
    pub company_name: String,
    /// Price to earnings ratio.
    pub pe_ratio: Option<f64>,
    /// Expected (or historical) annual EPS growth, in percent.
    pub eps_growth_pct: Option<f64>,
    /// Return on equity, in percent.
    pub roe_pct: Option<f64>,
    /// Total debt to shareholder equity.
    pub debt_to_equity: Option<f64>,
    /// Net profit margin, in percent.
    pub profit_margin_pct: Option<f64>,
}

impl StockMetrics {
    /// Create a record with no metrics filled in.
    #[must_use]
    pub fn new(ticker: Ticker, company_name: impl Into<String>) -> Self {
        Self {
            ticker,
            company_name: company_name.into(),
            pe_ratio: None,
            eps_growth_pct: None,
            roe_pct: None,
            debt_to_equity: None,
            profit_margin_pct: None,
        }
    }

    /// Set the P/E ratio.
    #[must_use]
    pub fn with_pe_ratio(mut self, value: f64) -> Self {
        self.pe_ratio = Some(value);
        self
    }

    /// Set the EPS growth percentage.
    #[must_use]
    pub fn with_eps_growth_pct(mut self, value: f64) -> Self {
        self.eps_growth_pct = Some(value);
        self
    }

    /// Set the return on equity percentage.
    #[must_use]
    pub fn with_roe_pct(mut self, value: f64) -> Self {
        self.roe_pct = Some(value);
        self
    }

    /// Set the debt to equity ratio.
    #[must_use]
    pub fn with_debt_to_equity(mut self, value: f64) -> Self {
        self.debt_to_equity = Some(value);
        self
    }

    /// Set the profit margin percentage.
    #[must_use]
    pub fn with_profit_margin_pct(mut self, value: f64) -> Self {
        self.profit_margin_pct = Some(value);
        self
    }

    /// Names of the numeric fields that are absent or non-finite.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("pe_ratio", self.pe_ratio),
            ("eps_growth_pct", self.eps_growth_pct),
            ("roe_pct", self.roe_pct),
            ("debt_to_equity", self.debt_to_equity),
            ("profit_margin_pct", self.profit_margin_pct),
        ]
        .into_iter()
        .filter(|(_, value)| crate::finite(*value).is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Qualitative label derived from a Buffett score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Verdict {
    /// Score of 80 or more.
    #[display("Strong candidate")]
    #[serde(rename = "Strong candidate")]
    StrongCandidate,
    /// Score from 60 to 79.
    #[display("Worth watching")]
    #[serde(rename = "Worth watching")]
    WorthWatching,
    /// Score below 60.
    #[display("Does not meet criteria")]
    #[serde(rename = "Does not meet criteria")]
    DoesNotMeetCriteria,
}

impl Verdict {
    /// Lowest score labelled [`Verdict::StrongCandidate`].
    pub const STRONG_CANDIDATE_MIN: u8 = 80;
    /// Lowest score labelled [`Verdict::WorthWatching`].
    pub const WORTH_WATCHING_MIN: u8 = 60;

    /// All verdicts, best first.
    pub const ALL: [Self; 3] = [
        Self::StrongCandidate,
        Self::WorthWatching,
        Self::DoesNotMeetCriteria,
    ];

    /// Map a score onto its verdict band.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= Self::STRONG_CANDIDATE_MIN {
            Self::StrongCandidate
        } else if score >= Self::WORTH_WATCHING_MIN {
            Self::WorthWatching
        } else {
            Self::DoesNotMeetCriteria
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StrongCandidate => "Strong candidate",
            Self::WorthWatching => "Worth watching",
            Self::DoesNotMeetCriteria => "Does not meet criteria",
        }
    }
}

/// Points awarded by one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionScore {
    /// Name of the criterion that produced the points.
    pub criterion: String,
    /// Points awarded, between zero and `max_points`.
    pub points: f64,
    /// Points available for this criterion.
    pub max_points: f64,
}

impl CriterionScore {
    /// Create a criterion score, clamping `points` into `[0, max_points]`.
    ///
    /// Non-finite points count as zero.
    #[must_use]
    pub fn new(criterion: impl Into<String>, points: f64, max_points: f64) -> Self {
        let max_points = if max_points.is_finite() { max_points.max(0.0) } else { 0.0 };
        let points = if points.is_finite() { points.clamp(0.0, max_points) } else { 0.0 };
        Self {
            criterion: criterion.into(),
            points,
            max_points,
        }
    }
}

/// A stock with its Buffett score and verdict.
///
/// Built once by a scorer and read-only afterwards. The score is the sum of
/// the breakdown, rounded and clamped to `0..=100`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredStock {
    metrics: StockMetrics,
    score: u8,
    verdict: Verdict,
    breakdown: Vec<CriterionScore>,
}

impl ScoredStock {
    /// Highest possible score.
    pub const MAX_SCORE: u8 = 100;

    /// Total a criterion breakdown into a scored record.
    #[must_use]
    pub fn new(metrics: StockMetrics, breakdown: Vec<CriterionScore>) -> Self {
        let total: f64 = breakdown.iter().map(|c| c.points).sum();
        let score = total.round().clamp(0.0, f64::from(Self::MAX_SCORE)) as u8;

        Self {
            metrics,
            score,
            verdict: Verdict::from_score(score),
            breakdown,
        }
    }

    /// The metrics the score was computed from.
    #[must_use]
    pub const fn metrics(&self) -> &StockMetrics {
        &self.metrics
    }

    /// The ticker of the scored company.
    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.metrics.ticker
    }

    /// Buffett score, `0..=100`.
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// Verdict band of the score.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Points awarded per criterion.
    #[must_use]
    pub fn breakdown(&self) -> &[CriterionScore] {
        &self.breakdown
    }
}
