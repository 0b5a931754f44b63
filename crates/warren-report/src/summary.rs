//! Aggregate statistics for a screening run.

use serde::Serialize;
use warren_traits::{ScoredStock, Verdict};

/// Number of stocks that landed in one verdict band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictCount {
    /// The verdict band
    pub verdict: Verdict,
    /// Stocks in the band
    pub count: usize,
}

/// Summary of a screening run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Stocks included in the report
    pub count: usize,
    /// Requested symbols that were malformed or could not be fetched
    pub skipped: Vec<String>,
    /// Mean score of the reported stocks, `None` when there are none
    pub average_score: Option<f64>,
    /// Stocks per verdict, best verdict first; every band is listed
    pub verdicts: Vec<VerdictCount>,
}

impl RunSummary {
    /// Summarize the reported records and the tickers that were skipped.
    #[must_use]
    pub fn calculate<'a>(
        records: impl IntoIterator<Item = &'a ScoredStock>,
        skipped: &[String],
    ) -> Self {
        let scores: Vec<(u8, Verdict)> = records
            .into_iter()
            .map(|r| (r.score(), r.verdict()))
            .collect();

        let count = scores.len();
        let average_score = (count > 0).then(|| {
            scores.iter().map(|(s, _)| f64::from(*s)).sum::<f64>() / count as f64
        });

        let verdicts = Verdict::ALL
            .into_iter()
            .map(|verdict| VerdictCount {
                verdict,
                count: scores.iter().filter(|(_, v)| *v == verdict).count(),
            })
            .collect();

        Self {
            count,
            skipped: skipped.to_vec(),
            average_score,
            verdicts,
        }
    }

    /// Stocks in a given verdict band.
    #[must_use]
    pub fn count_for(&self, verdict: Verdict) -> usize {
        self.verdicts
            .iter()
            .find(|v| v.verdict == verdict)
            .map_or(0, |v| v.count)
    }

    /// Whether nothing was scored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use warren_traits::{CriterionScore, StockMetrics, Ticker};

    fn scored(symbol: &str, score: f64) -> ScoredStock {
        let metrics = StockMetrics::new(Ticker::parse(symbol).unwrap(), symbol);
        ScoredStock::new(metrics, vec![CriterionScore::new("flat", score, 100.0)])
    }

    #[test]
    fn test_summary_counts() {
        let records = vec![scored("A", 90.0), scored("B", 85.0), scored("C", 62.0), scored("D", 10.0)];
        let skipped = vec!["ZZZ".to_string()];
        let summary = RunSummary::calculate(&records, &skipped);

        assert_eq!(summary.count, 4);
        assert_eq!(summary.skipped, skipped);
        assert_relative_eq!(summary.average_score.unwrap(), 61.75);
        assert_eq!(summary.count_for(Verdict::StrongCandidate), 2);
        assert_eq!(summary.count_for(Verdict::WorthWatching), 1);
        assert_eq!(summary.count_for(Verdict::DoesNotMeetCriteria), 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = RunSummary::calculate(&[], &[]);
        assert!(summary.is_empty());
        assert_eq!(summary.average_score, None);
        assert_eq!(summary.verdicts.len(), 3);
        assert!(summary.verdicts.iter().all(|v| v.count == 0));
    }
}
