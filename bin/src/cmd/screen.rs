//! Batch screen command implementation.

use crate::data;
use anyhow::Result;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use warren_report::{ReportConfig, Reporter};
use warren_score::BuffettScorer;
use warren_traits::{MetricsSource, ScoredStock, Ticker, Verdict};

/// Options for a screening run.
#[derive(Debug, Clone)]
pub(crate) struct ScreenConfig {
    /// Raw ticker symbols as given on the command line
    pub(crate) tickers: Vec<String>,
    /// Use the curated snapshot instead of Finviz
    pub(crate) offline: bool,
    /// Where and how much to report
    pub(crate) report: ReportConfig,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            tickers: data::default_tickers(),
            offline: false,
            report: ReportConfig::default(),
        }
    }
}

/// Scored stocks and the requested symbols that produced no record.
#[derive(Debug, Default)]
pub(crate) struct Screened {
    pub(crate) scored: Vec<ScoredStock>,
    pub(crate) skipped: Vec<String>,
}

impl Screened {
    fn skip(&mut self, symbol: String) {
        if !self.skipped.contains(&symbol) {
            self.skipped.push(symbol);
        }
    }
}

/// Label for a symbol that failed to parse as a ticker.
fn invalid_label(symbol: &str) -> String {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        "(blank)".to_string()
    } else {
        trimmed.to_uppercase()
    }
}

/// Fetch and score each distinct ticker in input order.
///
/// Repeated symbols are screened once. Malformed symbols and failed fetches
/// are recorded as skipped.
pub(crate) async fn collect(
    source: &dyn MetricsSource,
    scorer: &BuffettScorer,
    symbols: &[String],
) -> Screened {
    let mut screened = Screened::default();
    let mut seen = HashSet::new();

    for symbol in symbols {
        let ticker = match Ticker::parse(symbol) {
            Ok(ticker) => ticker,
            Err(e) => {
                warn!(symbol = %symbol, error = %e, "Skipping malformed ticker");
                screened.skip(invalid_label(symbol));
                continue;
            }
        };
        if !seen.insert(ticker.clone()) {
            debug!(ticker = %ticker, "Ignoring repeated ticker");
            continue;
        }

        match source.fetch(&ticker).await {
            Ok(metrics) => {
                let missing = metrics.missing_fields();
                if !missing.is_empty() {
                    debug!(ticker = %ticker, missing = ?missing, "Metrics incomplete");
                }
                let scored = scorer.score(metrics);
                info!(
                    ticker = %ticker,
                    score = scored.score(),
                    verdict = %scored.verdict(),
                    "Scored"
                );
                screened.scored.push(scored);
            }
            Err(e) => {
                warn!(ticker = %ticker, source = source.name(), error = %e, "Skipping ticker");
                screened.skip(ticker.to_string());
            }
        }
    }

    screened
}

/// Screen the configured tickers and write the three reports.
pub(crate) async fn screen(config: ScreenConfig) -> Result<()> {
    let source = data::metrics_source(config.offline)?;
    let scorer = BuffettScorer::default();

    println!(
        "\nUncle Warren is screening {} stock(s) with {} data...\n",
        config.tickers.len(),
        source.name()
    );

    let screened = collect(source.as_ref(), &scorer, &config.tickers).await;

    let reporter = Reporter::new(config.report);
    let bundle = reporter.generate(&screened.scored, &screened.skipped)?;
    let written = reporter.write(&bundle)?;

    println!("{}", bundle.text);
    println!(
        "{} strong candidate(s), {} worth watching.\n",
        bundle.summary.count_for(Verdict::StrongCandidate),
        bundle.summary.count_for(Verdict::WorthWatching)
    );
    println!("Reports written:");
    for path in [&written.csv_path, &written.text_path, &written.json_path] {
        println!("  {}", path.display());
    }
    println!();

    Ok(())
}
