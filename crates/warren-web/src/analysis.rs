//! The scored, explained result shown for one ticker.

use serde::Serialize;
use warren_score::{BuffettScorer, Explanation};
use warren_traits::{CriterionScore, ScoredStock, StockMetrics, Ticker, Verdict};

/// Everything the form and the JSON API report for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Normalized ticker
    pub ticker: Ticker,
    /// Company name
    pub company_name: String,
    /// Buffett score, `0..=100`
    pub score: u8,
    /// Verdict band
    pub verdict: Verdict,
    /// Metrics the score was computed from
    pub metrics: StockMetrics,
    /// Points per criterion
    pub breakdown: Vec<CriterionScore>,
    /// Points in favour
    pub reasons_for: Vec<String>,
    /// Points against
    pub reasons_against: Vec<String>,
    /// Short verdict text
    pub summary: String,
}

impl Analysis {
    /// Explain a scored stock with the scorer that produced it.
    #[must_use]
    pub fn new(scorer: &BuffettScorer, scored: &ScoredStock) -> Self {
        let Explanation {
            reasons_for,
            reasons_against,
            summary,
        } = Explanation::new(scorer, scored);
        let metrics = scored.metrics().clone();

        Self {
            ticker: metrics.ticker.clone(),
            company_name: metrics.company_name.clone(),
            score: scored.score(),
            verdict: scored.verdict(),
            breakdown: scored.breakdown().to_vec(),
            metrics,
            reasons_for,
            reasons_against,
            summary,
        }
    }
}
