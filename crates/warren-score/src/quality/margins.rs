//! Profit margin criterion, used as a proxy for an economic moat.

use serde::{Deserialize, Serialize};
use warren_traits::{Criterion, Observation, StockMetrics, finite};

/// Configuration for the profit margin criterion.
///
/// Profit margins measure how much of each sales dollar the business keeps.
/// Persistently wide margins hint at pricing power that competitors cannot
/// erode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitMarginConfig {
    /// Margin (percent) at which full credit is reached (default: 20)
    pub full_credit_pct: f64,

    /// Points for a margin at or above the threshold (default: 20)
    pub max_points: f64,
}

impl Default for ProfitMarginConfig {
    fn default() -> Self {
        Self {
            full_credit_pct: 20.0,
            max_points: 20.0,
        }
    }
}

/// Moat proxy criterion: credit proportional to net profit margin.
///
/// # Example
///
/// ```
/// use warren_score::quality::{ProfitMargin, ProfitMarginConfig};
///
/// let criterion = ProfitMargin::new(ProfitMarginConfig {
///     full_credit_pct: 30.0,
///     ..Default::default()
/// });
/// assert_eq!(criterion.full_credit_pct(), 30.0);
/// ```
#[derive(Debug, Clone)]
pub struct ProfitMargin {
    config: ProfitMarginConfig,
}

impl ProfitMargin {
    /// Create a new profit margin criterion with the given configuration.
    #[must_use]
    pub const fn new(config: ProfitMarginConfig) -> Self {
        Self { config }
    }

    /// Get the full-credit margin threshold.
    #[must_use]
    pub const fn full_credit_pct(&self) -> f64 {
        self.config.full_credit_pct
    }
}

impl Default for ProfitMargin {
    fn default() -> Self {
        Self::new(ProfitMarginConfig::default())
    }
}

impl Criterion for ProfitMargin {
    fn name(&self) -> &str {
        "profit_margin"
    }

    fn max_points(&self) -> f64 {
        self.config.max_points
    }

    fn points(&self, metrics: &StockMetrics) -> f64 {
        let threshold = self.config.full_credit_pct;
        match finite(metrics.profit_margin_pct) {
            Some(m) if m >= threshold => self.config.max_points,
            Some(m) if m > 0.0 => self.config.max_points * m / threshold,
            _ => 0.0,
        }
    }

    fn observe(&self, metrics: &StockMetrics) -> Option<Observation> {
        let observation = match finite(metrics.profit_margin_pct) {
            None => Observation::Concern("Profit margin data not available".to_string()),
            Some(m) if m >= self.config.full_credit_pct => Observation::Strength(format!(
                "Wide profit margin of {m:.1}% points to a durable moat"
            )),
            Some(m) if m >= 10.0 => Observation::Strength(format!("Healthy profit margin of {m:.1}%")),
            Some(m) if m > 0.0 => Observation::Concern(format!("Thin profit margin of {m:.1}%")),
            Some(m) => Observation::Concern(format!("Unprofitable with a margin of {m:.1}%")),
        };
        Some(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use warren_traits::Ticker;

    fn with_margin(m: f64) -> StockMetrics {
        StockMetrics::new(Ticker::parse("TEST").unwrap(), "Test Corp").with_profit_margin_pct(m)
    }

    #[test]
    fn test_default_config() {
        let config = ProfitMarginConfig::default();
        assert_relative_eq!(config.full_credit_pct, 20.0);
        assert_relative_eq!(config.max_points, 20.0);
    }

    #[test]
    fn test_proportional_credit() {
        let criterion = ProfitMargin::default();
        assert_relative_eq!(criterion.points(&with_margin(2.0)), 2.0);
        assert_relative_eq!(criterion.points(&with_margin(15.2)), 15.2);
        assert_relative_eq!(criterion.points(&with_margin(20.0)), 20.0);
        assert_relative_eq!(criterion.points(&with_margin(54.0)), 20.0);
    }

    #[test]
    fn test_losses_earn_nothing() {
        let criterion = ProfitMargin::default();
        assert_relative_eq!(criterion.points(&with_margin(0.0)), 0.0);
        assert_relative_eq!(criterion.points(&with_margin(-30.0)), 0.0);
        assert_relative_eq!(criterion.points(&with_margin(f64::INFINITY)), 0.0);
    }

    #[test]
    fn test_observations() {
        let criterion = ProfitMargin::default();
        assert_eq!(
            criterion.observe(&with_margin(2.6)).unwrap().text(),
            "Thin profit margin of 2.6%"
        );
        assert!(matches!(criterion.observe(&with_margin(25.3)), Some(Observation::Strength(_))));
    }
}
