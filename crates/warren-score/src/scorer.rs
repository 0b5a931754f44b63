//! The Buffett scorer: sums criterion points into a 0-100 score.

use crate::{
    balance::{Leverage, LeverageConfig},
    growth::{EarningsGrowth, EarningsGrowthConfig},
    quality::{ProfitMargin, ProfitMarginConfig, ReturnOnEquity, ReturnOnEquityConfig},
    value::{Valuation, ValuationConfig},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use warren_traits::{Criterion, Observation, ScoredStock, StockMetrics};

/// Configuration of the five standard criteria.
///
/// With the defaults every criterion is worth 20 points, so a perfect stock
/// scores exactly 100.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// P/E valuation
    pub valuation: ValuationConfig,
    /// EPS growth
    pub earnings_growth: EarningsGrowthConfig,
    /// Return on equity
    pub return_on_equity: ReturnOnEquityConfig,
    /// Debt to equity
    pub leverage: LeverageConfig,
    /// Profit margin
    pub profit_margin: ProfitMarginConfig,
}

/// Scores stocks against a fixed set of criteria.
///
/// Scoring is pure and deterministic: identical metrics always produce an
/// identical score and verdict.
///
/// # Example
///
/// ```
/// use warren_score::BuffettScorer;
/// use warren_traits::{StockMetrics, Ticker, Verdict};
///
/// let metrics = StockMetrics::new(Ticker::parse("JNJ").unwrap(), "Johnson & Johnson")
///     .with_pe_ratio(12.0)
///     .with_eps_growth_pct(15.0)
///     .with_roe_pct(22.0)
///     .with_debt_to_equity(0.3)
///     .with_profit_margin_pct(20.0);
///
/// let scored = BuffettScorer::default().score(metrics);
/// assert_eq!(scored.verdict(), Verdict::StrongCandidate);
/// ```
pub struct BuffettScorer {
    criteria: Vec<Box<dyn Criterion>>,
}

impl BuffettScorer {
    /// Create a scorer with the five standard criteria.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_criteria(vec![
            Box::new(Valuation::new(config.valuation)),
            Box::new(EarningsGrowth::new(config.earnings_growth)),
            Box::new(ReturnOnEquity::new(config.return_on_equity)),
            Box::new(Leverage::new(config.leverage)),
            Box::new(ProfitMargin::new(config.profit_margin)),
        ])
    }

    /// Create a scorer from an arbitrary set of criteria.
    ///
    /// The total is still clamped to `0..=100`.
    #[must_use]
    pub fn with_criteria(criteria: Vec<Box<dyn Criterion>>) -> Self {
        Self { criteria }
    }

    /// The configured criteria, in scoring order.
    #[must_use]
    pub fn criteria(&self) -> &[Box<dyn Criterion>] {
        &self.criteria
    }

    /// Total points available across all criteria.
    #[must_use]
    pub fn max_points(&self) -> f64 {
        self.criteria.iter().map(|c| c.max_points()).sum()
    }

    /// Score a stock.
    #[must_use]
    pub fn score(&self, metrics: StockMetrics) -> ScoredStock {
        let breakdown = self
            .criteria
            .iter()
            .map(|criterion| criterion.evaluate(&metrics))
            .collect();

        let scored = ScoredStock::new(metrics, breakdown);
        debug!(
            ticker = %scored.ticker(),
            score = scored.score(),
            verdict = %scored.verdict(),
            "Scored stock"
        );
        scored
    }

    /// Collect every criterion's observation about a stock.
    #[must_use]
    pub fn observe(&self, metrics: &StockMetrics) -> Vec<Observation> {
        self.criteria
            .iter()
            .filter_map(|criterion| criterion.observe(metrics))
            .collect()
    }
}

impl Default for BuffettScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl fmt::Debug for BuffettScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.criteria.iter().map(|c| c.name()).collect();
        f.debug_struct("BuffettScorer")
            .field("criteria", &names)
            .finish()
    }
}
