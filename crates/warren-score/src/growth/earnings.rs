//! EPS growth criterion.

use serde::{Deserialize, Serialize};
use warren_traits::{Criterion, Observation, StockMetrics, finite};

/// Configuration for the earnings growth criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsGrowthConfig {
    /// Growth (percent) at which full credit is reached (default: 10)
    pub full_credit_pct: f64,

    /// Points for growth at or above the threshold (default: 20)
    pub max_points: f64,
}

impl Default for EarningsGrowthConfig {
    fn default() -> Self {
        Self {
            full_credit_pct: 10.0,
            max_points: 20.0,
        }
    }
}

/// Earnings growth criterion.
///
/// Full credit from `full_credit_pct` upward, proportional credit between
/// zero and the threshold, nothing for flat or shrinking earnings.
#[derive(Debug, Clone)]
pub struct EarningsGrowth {
    config: EarningsGrowthConfig,
}

impl EarningsGrowth {
    /// Create a new earnings growth criterion with the given configuration.
    #[must_use]
    pub const fn new(config: EarningsGrowthConfig) -> Self {
        Self { config }
    }

    /// Get the full-credit growth threshold.
    #[must_use]
    pub const fn full_credit_pct(&self) -> f64 {
        self.config.full_credit_pct
    }
}

impl Default for EarningsGrowth {
    fn default() -> Self {
        Self::new(EarningsGrowthConfig::default())
    }
}

impl Criterion for EarningsGrowth {
    fn name(&self) -> &str {
        "earnings_growth"
    }

    fn max_points(&self) -> f64 {
        self.config.max_points
    }

    fn points(&self, metrics: &StockMetrics) -> f64 {
        let threshold = self.config.full_credit_pct;
        match finite(metrics.eps_growth_pct) {
            Some(g) if g >= threshold => self.config.max_points,
            Some(g) if g > 0.0 => self.config.max_points * g / threshold,
            _ => 0.0,
        }
    }

    fn observe(&self, metrics: &StockMetrics) -> Option<Observation> {
        let observation = match finite(metrics.eps_growth_pct) {
            None => Observation::Concern("Earnings growth data not available".to_string()),
            Some(g) if g > 20.0 => {
                Observation::Strength(format!("Excellent earnings growth of {g:.1}%"))
            }
            Some(g) if g > 15.0 => Observation::Strength(format!("Strong earnings growth of {g:.1}%")),
            Some(g) if g >= self.config.full_credit_pct => {
                Observation::Strength(format!("Solid earnings growth of {g:.1}%"))
            }
            Some(g) => Observation::Concern(format!(
                "EPS growth of {g:.1}% is below the {:.0}% threshold",
                self.config.full_credit_pct
            )),
        };
        Some(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use warren_traits::Ticker;

    fn with_growth(g: f64) -> StockMetrics {
        StockMetrics::new(Ticker::parse("TEST").unwrap(), "Test Corp").with_eps_growth_pct(g)
    }

    #[test]
    fn test_default_config() {
        let criterion = EarningsGrowth::default();
        assert_relative_eq!(criterion.full_credit_pct(), 10.0);
        assert_relative_eq!(criterion.max_points(), 20.0);
    }

    #[test]
    fn test_full_credit_above_threshold() {
        let criterion = EarningsGrowth::default();
        assert_relative_eq!(criterion.points(&with_growth(15.0)), 20.0);
        assert_relative_eq!(criterion.points(&with_growth(10.0)), 20.0);
    }

    #[test]
    fn test_partial_credit() {
        let criterion = EarningsGrowth::default();
        assert_relative_eq!(criterion.points(&with_growth(5.0)), 10.0);
        assert_relative_eq!(criterion.points(&with_growth(2.5)), 5.0);
    }

    #[test]
    fn test_no_credit_for_shrinking_earnings() {
        let criterion = EarningsGrowth::default();
        assert_relative_eq!(criterion.points(&with_growth(0.0)), 0.0);
        assert_relative_eq!(criterion.points(&with_growth(-5.0)), 0.0);
    }

    #[test]
    fn test_monotonic() {
        let criterion = EarningsGrowth::default();
        let mut previous = 0.0;
        for step in -20..60 {
            let points = criterion.points(&with_growth(f64::from(step) * 0.5));
            assert!(points >= previous);
            previous = points;
        }
    }

    #[test]
    fn test_observations() {
        let criterion = EarningsGrowth::default();
        assert_eq!(
            criterion.observe(&with_growth(21.4)).unwrap().text(),
            "Excellent earnings growth of 21.4%"
        );
        assert_eq!(
            criterion.observe(&with_growth(-5.0)),
            Some(Observation::Concern(
                "EPS growth of -5.0% is below the 10% threshold".to_string()
            ))
        );
    }
}
