//! P/E valuation criterion.

use serde::{Deserialize, Serialize};
use warren_traits::{Criterion, Observation, StockMetrics, finite};

/// Configuration for the valuation criterion.
///
/// Points fall linearly from `max_points` at a P/E of zero to nothing at
/// `pe_ceiling`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// P/E at or above which no points are awarded (default: 35)
    pub pe_ceiling: f64,

    /// Points awarded at a P/E of zero (default: 20)
    pub max_points: f64,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            pe_ceiling: 35.0,
            max_points: 20.0,
        }
    }
}

/// Valuation criterion: cheaper earnings score higher.
///
/// A missing P/E (usually negative earnings) earns nothing, as does a
/// negative one.
///
/// # Example
///
/// ```
/// use warren_score::value::Valuation;
/// use warren_traits::{Criterion, StockMetrics, Ticker};
///
/// let metrics = StockMetrics::new(Ticker::parse("KO").unwrap(), "Coca-Cola Co")
///     .with_pe_ratio(17.5);
/// assert_eq!(Valuation::default().points(&metrics), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct Valuation {
    config: ValuationConfig,
}

impl Valuation {
    /// Create a new valuation criterion with the given configuration.
    #[must_use]
    pub const fn new(config: ValuationConfig) -> Self {
        Self { config }
    }

    /// Get the P/E ceiling.
    #[must_use]
    pub const fn pe_ceiling(&self) -> f64 {
        self.config.pe_ceiling
    }
}

impl Default for Valuation {
    fn default() -> Self {
        Self::new(ValuationConfig::default())
    }
}

impl Criterion for Valuation {
    fn name(&self) -> &str {
        "valuation"
    }

    fn max_points(&self) -> f64 {
        self.config.max_points
    }

    fn points(&self, metrics: &StockMetrics) -> f64 {
        let ceiling = self.config.pe_ceiling;
        match finite(metrics.pe_ratio) {
            Some(pe) if ceiling > 0.0 && (0.0..ceiling).contains(&pe) => {
                self.config.max_points * (ceiling - pe) / ceiling
            }
            _ => 0.0,
        }
    }

    fn observe(&self, metrics: &StockMetrics) -> Option<Observation> {
        let observation = match finite(metrics.pe_ratio) {
            None => Observation::Concern("No P/E ratio available (may be unprofitable)".to_string()),
            Some(pe) if pe < 0.0 => {
                Observation::Concern(format!("Negative P/E of {pe:.1} (company is unprofitable)"))
            }
            Some(pe) if pe < 15.0 => {
                Observation::Strength(format!("Attractively valued at {pe:.1}x earnings"))
            }
            Some(pe) if pe < 20.0 => {
                Observation::Strength(format!("Reasonably priced at {pe:.1}x earnings"))
            }
            Some(pe) if pe < 25.0 => {
                Observation::Strength(format!("Fairly valued at {pe:.1}x earnings"))
            }
            Some(pe) if pe < self.config.pe_ceiling => {
                Observation::Concern(format!("P/E of {pe:.1} is on the higher side"))
            }
            Some(pe) => Observation::Concern(format!(
                "P/E of {pe:.1} exceeds the threshold of {:.0}",
                self.config.pe_ceiling
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

    fn with_pe(pe: f64) -> StockMetrics {
        StockMetrics::new(Ticker::parse("TEST").unwrap(), "Test Corp").with_pe_ratio(pe)
    }

    #[test]
    fn test_default_config() {
        let config = ValuationConfig::default();
        assert_relative_eq!(config.pe_ceiling, 35.0);
        assert_relative_eq!(config.max_points, 20.0);
    }

    #[test]
    fn test_zero_pe_earns_maximum() {
        assert_relative_eq!(Valuation::default().points(&with_pe(0.0)), 20.0);
    }

    #[test]
    fn test_ceiling_earns_nothing() {
        let criterion = Valuation::default();
        assert_relative_eq!(criterion.points(&with_pe(35.0)), 0.0);
        assert_relative_eq!(criterion.points(&with_pe(60.0)), 0.0);
    }

    #[test]
    fn test_linear_between() {
        let criterion = Valuation::default();
        assert_relative_eq!(criterion.points(&with_pe(12.0)), 20.0 * 23.0 / 35.0);
        assert!(criterion.points(&with_pe(10.0)) > criterion.points(&with_pe(20.0)));
    }

    #[test]
    fn test_missing_or_absurd_pe() {
        let criterion = Valuation::default();
        let missing = StockMetrics::new(Ticker::parse("TEST").unwrap(), "Test Corp");
        assert_relative_eq!(criterion.points(&missing), 0.0);
        assert_relative_eq!(criterion.points(&with_pe(-8.0)), 0.0);
        assert_relative_eq!(criterion.points(&with_pe(f64::NAN)), 0.0);
    }

    #[test]
    fn test_custom_ceiling() {
        let criterion = Valuation::new(ValuationConfig {
            pe_ceiling: 20.0,
            max_points: 10.0,
        });
        assert_relative_eq!(criterion.pe_ceiling(), 20.0);
        assert_relative_eq!(criterion.points(&with_pe(10.0)), 5.0);
        assert_relative_eq!(criterion.points(&with_pe(25.0)), 0.0);
    }

    #[test]
    fn test_observations() {
        let criterion = Valuation::default();
        assert_eq!(
            criterion.observe(&with_pe(9.8)),
            Some(Observation::Strength("Attractively valued at 9.8x earnings".to_string()))
        );
        assert_eq!(
            criterion.observe(&with_pe(32.4)),
            Some(Observation::Concern("P/E of 32.4 is on the higher side".to_string()))
        );
        assert_eq!(
            criterion.observe(&with_pe(60.0)),
            Some(Observation::Concern("P/E of 60.0 exceeds the threshold of 35".to_string()))
        );
    }
}
