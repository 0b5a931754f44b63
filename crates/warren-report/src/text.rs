//! Plain-text report layout.

use crate::RunSummary;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use warren_traits::{ScoredStock, format_metric};

const RULE: usize = 70;
const ENTRY_RULE: usize = 50;

const CRITERIA: [&str; 5] = [
    "P/E Ratio < 35 (reasonable valuation)",
    "EPS Growth > 10% (growing earnings power)",
    "ROE > 15% (efficient capital allocation)",
    "Low debt relative to equity (conservative balance sheet)",
    "Wide profit margins (durable competitive moat)",
];

const WISDOM: [&str; 3] = [
    "\"Price is what you pay. Value is what you get.\"",
    "\"Our favorite holding period is forever.\"",
    "\"Be fearful when others are greedy, and greedy when others are fearful.\"",
];

/// Render the ranked stocks and run summary as a human-readable report.
pub(crate) fn render(
    ranked: &[&ScoredStock],
    summary: &RunSummary,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE);

    line(&mut out, &rule);
    line(&mut out, "UNCLE WARREN SAYS - Stock Recommendations");
    line(&mut out, &format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")));
    line(&mut out, &rule);
    line(&mut out, "");
    line(&mut out, "Screening Criteria (Buffett's Principles):");
    for criterion in CRITERIA {
        line(&mut out, &format!("  - {criterion}"));
    }
    line(&mut out, "");
    line(&mut out, &rule);
    line(&mut out, "");

    if ranked.is_empty() {
        line(&mut out, "No results: no stocks could be fetched and scored.");
        line(&mut out, "");
    }

    for (rank, record) in ranked.iter().enumerate() {
        render_entry(&mut out, rank + 1, record);
    }

    render_summary(&mut out, summary);

    line(&mut out, &rule);
    line(&mut out, "UNCLE WARREN'S WISDOM:");
    for quote in WISDOM {
        line(&mut out, "");
        line(&mut out, quote);
    }
    line(&mut out, &rule);

    out
}

fn render_entry(out: &mut String, rank: usize, record: &ScoredStock) {
    let metrics = record.metrics();

    line(out, &format!("#{rank} {} - {}", metrics.ticker, metrics.company_name));
    line(out, &"-".repeat(ENTRY_RULE));
    line(out, &format!("  P/E Ratio:     {}", format_metric(metrics.pe_ratio, 1, "")));
    line(out, &format!("  EPS Growth:    {}", format_metric(metrics.eps_growth_pct, 1, "%")));
    line(out, &format!("  ROE:           {}", format_metric(metrics.roe_pct, 1, "%")));
    line(out, &format!("  Debt/Equity:   {}", format_metric(metrics.debt_to_equity, 2, "")));
    line(out, &format!("  Profit Margin: {}", format_metric(metrics.profit_margin_pct, 1, "%")));
    line(out, &format!("  Buffett Score: {}/100", record.score()));
    line(out, &format!("  Verdict:       {}", record.verdict()));
    line(out, "");
    line(out, "  Score breakdown:");
    for criterion in record.breakdown() {
        line(
            out,
            &format!(
                "    {:<18} {:>5.1} / {:.0}",
                criterion.criterion, criterion.points, criterion.max_points
            ),
        );
    }
    line(out, "");
    line(out, "");
}

fn render_summary(out: &mut String, summary: &RunSummary) {
    line(out, "SUMMARY");
    line(out, &"-".repeat(ENTRY_RULE));
    line(out, &format!("  Stocks ranked:   {}", summary.count));

    if summary.skipped.is_empty() {
        line(out, "  Tickers skipped: 0");
    } else {
        line(
            out,
            &format!(
                "  Tickers skipped: {} (N/A: {})",
                summary.skipped.len(),
                summary.skipped.join(", ")
            ),
        );
    }

    let average = summary
        .average_score
        .map_or_else(|| "N/A".to_string(), |avg| format!("{avg:.1}"));
    line(out, &format!("  Average score:   {average}"));

    for verdict in &summary.verdicts {
        line(out, &format!("  {:<24} {}", format!("{}:", verdict.verdict), verdict.count));
    }
    line(out, "");
}

fn line(out: &mut String, text: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{text}");
}
