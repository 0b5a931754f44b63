//! Return on equity criterion.

use serde::{Deserialize, Serialize};
use warren_traits::{Criterion, Observation, StockMetrics, finite};

/// Configuration for the return on equity criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnOnEquityConfig {
    /// ROE (percent) at which full credit is reached (default: 15)
    pub full_credit_pct: f64,

    /// Points for ROE at or above the threshold (default: 20)
    pub max_points: f64,
}

impl Default for ReturnOnEquityConfig {
    fn default() -> Self {
        Self {
            full_credit_pct: 15.0,
            max_points: 20.0,
        }
    }
}

/// Capital efficiency criterion based on return on equity.
#[derive(Debug, Clone)]
pub struct ReturnOnEquity {
    config: ReturnOnEquityConfig,
}

impl ReturnOnEquity {
    /// Create a new ROE criterion with the given configuration.
    #[must_use]
    pub const fn new(config: ReturnOnEquityConfig) -> Self {
        Self { config }
    }

    /// Get the full-credit ROE threshold.
    #[must_use]
    pub const fn full_credit_pct(&self) -> f64 {
        self.config.full_credit_pct
    }
}

impl Default for ReturnOnEquity {
    fn default() -> Self {
        Self::new(ReturnOnEquityConfig::default())
    }
}

impl Criterion for ReturnOnEquity {
    fn name(&self) -> &str {
        "return_on_equity"
    }

    fn max_points(&self) -> f64 {
        self.config.max_points
    }

    fn points(&self, metrics: &StockMetrics) -> f64 {
        let threshold = self.config.full_credit_pct;
        match finite(metrics.roe_pct) {
            Some(roe) if roe >= threshold => self.config.max_points,
            Some(roe) if roe > 0.0 => self.config.max_points * roe / threshold,
            _ => 0.0,
        }
    }

    fn observe(&self, metrics: &StockMetrics) -> Option<Observation> {
        let observation = match finite(metrics.roe_pct) {
            None => Observation::Concern("ROE data not available".to_string()),
            Some(roe) if roe > 30.0 => {
                Observation::Strength(format!("Exceptional return on equity of {roe:.1}%"))
            }
            Some(roe) if roe > 20.0 => {
                Observation::Strength(format!("Strong return on equity of {roe:.1}%"))
            }
            Some(roe) if roe >= self.config.full_credit_pct => {
                Observation::Strength(format!("Solid return on equity of {roe:.1}%"))
            }
            Some(roe) => Observation::Concern(format!(
                "ROE of {roe:.1}% is below the {:.0}% threshold",
                self.config.full_credit_pct
            )),
        };
        Some(observation)
    }
}
