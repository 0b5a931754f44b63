//! Debt to equity criterion.

use serde::{Deserialize, Serialize};
use warren_traits::{Criterion, Observation, StockMetrics, finite};

/// Configuration for the leverage criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeverageConfig {
    /// D/E at or below which full credit is given (default: 0.5)
    pub full_credit_below: f64,

    /// D/E at or above which no credit is given (default: 2.0)
    pub cutoff: f64,

    /// Points for a conservative balance sheet (default: 20)
    pub max_points: f64,
}

impl Default for LeverageConfig {
    fn default() -> Self {
        Self {
            full_credit_below: 0.5,
            cutoff: 2.0,
            max_points: 20.0,
        }
    }
}

/// Leverage criterion: less debt scores higher.
///
/// Credit is full up to `full_credit_below`, then falls linearly to nothing
/// at `cutoff`. A negative ratio means negative shareholder equity and earns
/// nothing.
#[derive(Debug, Clone)]
pub struct Leverage {
    config: LeverageConfig,
}

impl Leverage {
    /// Create a new leverage criterion with the given configuration.
    #[must_use]
    pub const fn new(config: LeverageConfig) -> Self {
        Self { config }
    }

    /// Get the high-leverage cutoff.
    #[must_use]
    pub const fn cutoff(&self) -> f64 {
        self.config.cutoff
    }
}

impl Default for Leverage {
    fn default() -> Self {
        Self::new(LeverageConfig::default())
    }
}

impl Criterion for Leverage {
    fn name(&self) -> &str {
        "leverage"
    }

    fn max_points(&self) -> f64 {
        self.config.max_points
    }

    fn points(&self, metrics: &StockMetrics) -> f64 {
        let LeverageConfig {
            full_credit_below,
            cutoff,
            max_points,
        } = self.config;

        match finite(metrics.debt_to_equity) {
            Some(de) if de < 0.0 || de >= cutoff => 0.0,
            Some(de) if de <= full_credit_below => max_points,
            Some(de) => max_points * (cutoff - de) / (cutoff - full_credit_below),
            None => 0.0,
        }
    }

    fn observe(&self, metrics: &StockMetrics) -> Option<Observation> {
        match finite(metrics.debt_to_equity) {
            None => Some(Observation::Concern("Debt/equity data not available".to_string())),
            Some(de) if de < 0.0 => Some(Observation::Concern(format!(
                "Negative shareholder equity (D/E: {de:.2})"
            ))),
            Some(de) if de <= self.config.full_credit_below => {
                Some(Observation::Strength(format!("Very low debt (D/E: {de:.2})")))
            }
            Some(de) if de < 1.0 => Some(Observation::Strength(format!(
                "Conservative debt levels (D/E: {de:.2})"
            ))),
            Some(de) if de < 1.5 => None,
            Some(de) if de < self.config.cutoff => {
                Some(Observation::Concern(format!("Moderate debt levels (D/E: {de:.2})")))
            }
            Some(de) => Some(Observation::Concern(format!("High debt (D/E: {de:.2}) adds risk"))),
        }
    }
}
