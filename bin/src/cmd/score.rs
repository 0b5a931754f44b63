//! Single-ticker score command implementation.

use crate::data;
use anyhow::Result;
use std::fmt::Write as _;
use tracing::debug;
use warren_score::{BuffettScorer, Explanation};
use warren_traits::ScoredStock;

/// Score one ticker and print its breakdown and explanation.
pub(crate) async fn show_score(symbol: &str, offline: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                        Buffett Score                         ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let source = data::metrics_source(offline)?;
    let metrics = match source.fetch_symbol(symbol).await {
        Ok(metrics) => metrics,
        Err(e) if e.is_not_found() => {
            println!(
                "Could not find stock '{}'. Please check the ticker symbol.\n",
                symbol.trim().to_uppercase()
            );
            return Ok(());
        }
        Err(e) => {
            println!("Error fetching {}: {}\n", symbol.trim().to_uppercase(), e);
            return Ok(());
        }
    };

    let missing = metrics.missing_fields();
    if !missing.is_empty() {
        debug!(ticker = %metrics.ticker, missing = ?missing, "Metrics incomplete");
    }

    let scorer = BuffettScorer::default();
    let scored = scorer.score(metrics);
    let explanation = Explanation::new(&scorer, &scored);
    print!("{}", render(&scored, &explanation));

    Ok(())
}

/// Writing to a String cannot fail.
fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
}

fn render(scored: &ScoredStock, explanation: &Explanation) -> String {
    let mut out = String::new();
    let metrics = scored.metrics();

    line(&mut out, &format!("{} - {}", metrics.ticker, metrics.company_name));
    line(&mut out, &"-".repeat(60));
    line(&mut out, &format!("Buffett Score: {}/100", scored.score()));
    line(&mut out, &format!("Verdict:       {}", scored.verdict()));
    line(&mut out, "");

    line(&mut out, &format!("{:<20} {:>8}  {:>7}", "Criterion", "Points", "Max"));
    for criterion in scored.breakdown() {
        line(
            &mut out,
            &format!(
                "{:<20} {:>8.1}  {:>7.0}",
                criterion.criterion, criterion.points, criterion.max_points
            ),
        );
    }
    line(&mut out, "");

    for (heading, marker, reasons) in [
        ("Reasons for:", '+', &explanation.reasons_for),
        ("Reasons against:", '-', &explanation.reasons_against),
    ] {
        if reasons.is_empty() {
            continue;
        }
        line(&mut out, heading);
        for reason in reasons {
            line(&mut out, &format!("  {marker} {reason}"));
        }
    }
    line(&mut out, "");
    line(&mut out, &explanation.summary);
    line(&mut out, "");

    out
}
