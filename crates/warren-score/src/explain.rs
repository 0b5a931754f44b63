//! Plain-language explanation of a score.

use crate::BuffettScorer;
use serde::Serialize;
use warren_traits::{Observation, ScoredStock, Verdict};

/// Reasons behind a score plus a short verdict text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation {
    /// Points in favour, in criterion order
    pub reasons_for: Vec<String>,
    /// Points against, in criterion order
    pub reasons_against: Vec<String>,
    /// Two or three sentence summary
    pub summary: String,
}

impl Explanation {
    /// Explain a scored stock using the observations of `scorer`'s criteria.
    #[must_use]
    pub fn new(scorer: &BuffettScorer, scored: &ScoredStock) -> Self {
        let mut reasons_for = Vec::new();
        let mut reasons_against = Vec::new();
        for observation in scorer.observe(scored.metrics()) {
            match observation {
                Observation::Strength(text) => reasons_for.push(text),
                Observation::Concern(text) => reasons_against.push(text),
            }
        }

        let summary = summarize(scored, &reasons_for, &reasons_against);
        Self {
            reasons_for,
            reasons_against,
            summary,
        }
    }
}

fn summarize(scored: &ScoredStock, reasons_for: &[String], reasons_against: &[String]) -> String {
    let company = &scored.metrics().company_name;
    let mut summary = match scored.verdict() {
        Verdict::StrongCandidate => format!("Warren would likely approve of {company}."),
        Verdict::WorthWatching => format!("{company} has some Buffett-worthy qualities."),
        Verdict::DoesNotMeetCriteria => format!("Warren would likely pass on {company}."),
    };

    if let Some(first) = reasons_for.first() {
        summary.push_str(&format!(" {first}."));
    }
    if let Some(against) = reasons_against.first() {
        summary.push_str(&format!(" However, {}.", decapitalize(against)));
    } else if let Some(second) = reasons_for.get(1) {
        summary.push_str(&format!(" {second}."));
    }
    summary
}

/// Lower-case the first letter unless it starts an acronym such as "ROE" or
/// "P/E".
fn decapitalize(text: &str) -> String {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) if second.is_lowercase() || second == ' ' => {
            let mut out = first.to_lowercase().collect::<String>();
            out.push_str(&text[first.len_utf8()..]);
            out
        }
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_traits::{StockMetrics, Ticker};

    fn scored(pe: f64, eps: f64, roe: f64, de: f64, margin: f64) -> (BuffettScorer, ScoredStock) {
        let scorer = BuffettScorer::default();
        let metrics = StockMetrics::new(Ticker::parse("BRK.B").unwrap(), "Berkshire Hathaway")
            .with_pe_ratio(pe)
            .with_eps_growth_pct(eps)
            .with_roe_pct(roe)
            .with_debt_to_equity(de)
            .with_profit_margin_pct(margin);
        let scored = scorer.score(metrics);
        (scorer, scored)
    }

    #[test]
    fn test_strong_candidate_summary() {
        let (scorer, scored) = scored(9.8, 21.4, 15.8, 0.23, 25.0);
        let explanation = Explanation::new(&scorer, &scored);

        assert!(explanation.reasons_against.is_empty());
        assert_eq!(
            explanation.summary,
            "Warren would likely approve of Berkshire Hathaway. \
             Attractively valued at 9.8x earnings. Excellent earnings growth of 21.4%."
        );
    }

    #[test]
    fn test_summary_mentions_first_concern() {
        let (scorer, scored) = scored(60.0, -5.0, 3.0, 3.0, 2.0);
        let explanation = Explanation::new(&scorer, &scored);

        assert!(explanation.reasons_for.is_empty());
        assert_eq!(explanation.reasons_against.len(), 5);
        assert_eq!(
            explanation.summary,
            "Warren would likely pass on Berkshire Hathaway. \
             However, P/E of 60.0 exceeds the threshold of 35."
        );
    }

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("High debt"), "high debt");
        assert_eq!(decapitalize("ROE of 3%"), "ROE of 3%");
        assert_eq!(decapitalize("P/E of 40"), "P/E of 40");
        assert_eq!(decapitalize("No P/E ratio"), "no P/E ratio");
        assert_eq!(decapitalize(""), "");
    }
}
