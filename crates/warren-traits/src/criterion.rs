//! Criterion trait for scoring one aspect of a business.
//!
//! A criterion looks at a single metric of a [`StockMetrics`] record and
//! awards between zero and [`Criterion::max_points`] points. The Buffett score
//! is the sum over all configured criteria.

use crate::{CriterionScore, StockMetrics};

/// Something a criterion noticed about a company, used to explain a score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    /// A point in favour of the company.
    Strength(String),
    /// A point against the company.
    Concern(String),
}

impl Observation {
    /// The observation text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Strength(text) | Self::Concern(text) => text,
        }
    }
}

/// A scoring rule over one fundamental metric.
///
/// Implementations must be pure: the same metrics always yield the same
/// points. A missing or non-finite metric earns zero points, never an error.
///
/// # Example
///
/// ```
/// use warren_traits::{Criterion, Observation, StockMetrics};
///
/// struct HasMargin;
///
/// impl Criterion for HasMargin {
///     fn name(&self) -> &str {
///         "has_margin"
///     }
///
///     fn max_points(&self) -> f64 {
///         10.0
///     }
///
///     fn points(&self, metrics: &StockMetrics) -> f64 {
///         match metrics.profit_margin_pct {
///             Some(m) if m > 0.0 => 10.0,
///             _ => 0.0,
///         }
///     }
///
///     fn observe(&self, _metrics: &StockMetrics) -> Option<Observation> {
///         None
///     }
/// }
/// ```
pub trait Criterion: Send + Sync {
    /// Returns the name of this criterion.
    ///
    /// Used as the key of the score breakdown and in logs.
    fn name(&self) -> &str;

    /// Most points this criterion can award.
    fn max_points(&self) -> f64;

    /// Points awarded for the given metrics, in `[0, max_points]`.
    fn points(&self, metrics: &StockMetrics) -> f64;

    /// A human-readable remark about the metric this criterion reads, if the
    /// value is worth mentioning.
    fn observe(&self, metrics: &StockMetrics) -> Option<Observation>;

    /// Evaluate the criterion into a breakdown entry.
    fn evaluate(&self, metrics: &StockMetrics) -> CriterionScore {
        CriterionScore::new(self.name(), self.points(metrics), self.max_points())
    }
}

/// Keep only finite values, so NaN and infinity behave like a missing metric.
#[must_use]
pub fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Format a metric for display, `N/A` when missing or non-finite.
#[must_use]
pub fn format_metric(value: Option<f64>, precision: usize, suffix: &str) -> String {
    finite(value).map_or_else(|| "N/A".to_string(), |v| format!("{v:.precision$}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ticker;

    struct Fixed(f64);

    impl Criterion for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn max_points(&self) -> f64 {
            20.0
        }

        fn points(&self, _metrics: &StockMetrics) -> f64 {
            self.0
        }

        fn observe(&self, _metrics: &StockMetrics) -> Option<Observation> {
            Some(Observation::Strength("always".to_string()))
        }
    }

    fn metrics() -> StockMetrics {
        StockMetrics::new(Ticker::parse("TEST").unwrap(), "Test Corp")
    }

    #[test]
    fn test_evaluate_uses_name_and_max() {
        let score = Fixed(12.5).evaluate(&metrics());
        assert_eq!(score.criterion, "fixed");
        assert_eq!(score.points, 12.5);
        assert_eq!(score.max_points, 20.0);
    }

    #[test]
    fn test_evaluate_clamps_out_of_range_points() {
        assert_eq!(Fixed(99.0).evaluate(&metrics()).points, 20.0);
        assert_eq!(Fixed(-1.0).evaluate(&metrics()).points, 0.0);
    }

    #[test]
    fn test_observation_text() {
        let obs = Fixed(0.0).observe(&metrics()).unwrap();
        assert_eq!(obs.text(), "always");
        assert_eq!(Observation::Concern("debt".to_string()).text(), "debt");
    }

    #[test]
    fn test_format_metric() {
        assert_eq!(format_metric(Some(9.8), 1, "x"), "9.8x");
        assert_eq!(format_metric(Some(0.234), 2, ""), "0.23");
        assert_eq!(format_metric(None, 1, "%"), "N/A");
        assert_eq!(format_metric(Some(f64::NAN), 1, ""), "N/A");
        assert_eq!(format_metric(Some(f64::INFINITY), 1, "%"), "N/A");
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite(Some(1.5)), Some(1.5));
        assert_eq!(finite(Some(f64::NAN)), None);
        assert_eq!(finite(Some(f64::INFINITY)), None);
        assert_eq!(finite(None), None);
    }
}
