//! Ranking and serialization of scored stocks.

use crate::{ReportConfig, ReportError, Result, RunSummary, text};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{fs, path::PathBuf};
use tracing::info;
use warren_traits::{ScoredStock, Verdict, finite};

/// Column order of the CSV output.
pub const CSV_COLUMNS: [&str; 9] = [
    "ticker",
    "company_name",
    "pe_ratio",
    "eps_growth_pct",
    "roe_pct",
    "debt_to_equity",
    "profit_margin_pct",
    "score",
    "verdict",
];

/// One flat output row, shared by the CSV and JSON renderings.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    ticker: &'a str,
    company_name: &'a str,
    pe_ratio: Option<f64>,
    eps_growth_pct: Option<f64>,
    roe_pct: Option<f64>,
    debt_to_equity: Option<f64>,
    profit_margin_pct: Option<f64>,
    score: u8,
    verdict: Verdict,
}

impl<'a> From<&'a ScoredStock> for ReportRow<'a> {
    fn from(record: &'a ScoredStock) -> Self {
        let metrics = record.metrics();
        Self {
            ticker: metrics.ticker.as_str(),
            company_name: &metrics.company_name,
            pe_ratio: finite(metrics.pe_ratio),
            eps_growth_pct: finite(metrics.eps_growth_pct),
            roe_pct: finite(metrics.roe_pct),
            debt_to_equity: finite(metrics.debt_to_equity),
            profit_margin_pct: finite(metrics.profit_margin_pct),
            score: record.score(),
            verdict: record.verdict(),
        }
    }
}

/// The three rendered outputs of a run.
#[derive(Debug, Clone)]
pub struct ReportBundle {
    /// CSV with a header row
    pub csv: Vec<u8>,
    /// Pretty-printed JSON array
    pub json: Vec<u8>,
    /// Human-readable ranked report
    pub text: String,
    /// Aggregates over the reported stocks
    pub summary: RunSummary,
}

/// Paths of the files written by [`Reporter::write`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReport {
    /// CSV file
    pub csv_path: PathBuf,
    /// Text report
    pub text_path: PathBuf,
    /// JSON file
    pub json_path: PathBuf,
}

/// Ranks scored stocks and renders them as CSV, JSON and text.
#[derive(Debug, Clone)]
pub struct Reporter {
    config: ReportConfig,
    generated_at: DateTime<Utc>,
}

impl Reporter {
    /// Create a reporter stamped with the current time.
    #[must_use]
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            generated_at: Utc::now(),
        }
    }

    /// Override the generation timestamp printed in the text report.
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// The output configuration.
    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Sort by score descending, ties by ticker ascending, then apply the
    /// configured limit.
    #[must_use]
    pub fn rank<'a>(&self, records: &'a [ScoredStock]) -> Vec<&'a ScoredStock> {
        let mut ranked: Vec<&ScoredStock> = records.iter().collect();
        ranked.sort_by(|a, b| {
            b.score()
                .cmp(&a.score())
                .then_with(|| a.ticker().cmp(b.ticker()))
        });
        if let Some(limit) = self.config.limit {
            ranked.truncate(limit);
        }
        ranked
    }

    /// Render all three outputs.
    ///
    /// An empty `records` slice is valid and yields a header-only CSV, an
    /// empty JSON array and a text report stating there are no results.
    ///
    /// # Errors
    ///
    /// Returns an error if CSV or JSON serialization fails.
    ///
    /// `skipped` lists the requested symbols that produced no record.
    pub fn generate(&self, records: &[ScoredStock], skipped: &[String]) -> Result<ReportBundle> {
        let ranked = self.rank(records);
        let summary = RunSummary::calculate(ranked.iter().copied(), skipped);

        Ok(ReportBundle {
            csv: render_csv(&ranked)?,
            json: render_json(&ranked)?,
            text: text::render(&ranked, &summary, self.generated_at),
            summary,
        })
    }

    /// Write a rendered bundle to the configured files, replacing any
    /// previous run's output.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Write`] if the directory cannot be created or a
    /// file cannot be written.
    pub fn write(&self, bundle: &ReportBundle) -> Result<WrittenReport> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| ReportError::Write {
            path: dir.clone(),
            source,
        })?;

        let written = WrittenReport {
            csv_path: self.config.csv_path(),
            text_path: self.config.text_path(),
            json_path: self.config.json_path(),
        };

        for (path, contents) in [
            (&written.csv_path, bundle.csv.as_slice()),
            (&written.text_path, bundle.text.as_bytes()),
            (&written.json_path, bundle.json.as_slice()),
        ] {
            fs::write(path, contents).map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), bytes = contents.len(), "Wrote report file");
        }

        Ok(written)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

fn render_csv(ranked: &[&ScoredStock]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    // Header is written by hand so an empty run still gets one.
    writer.write_record(CSV_COLUMNS)?;
    for record in ranked {
        writer.serialize(ReportRow::from(*record))?;
    }

    writer
        .into_inner()
        .map_err(|e| ReportError::Csv(csv::Error::from(e.into_error())))
}

fn render_json(ranked: &[&ScoredStock]) -> Result<Vec<u8>> {
    let rows: Vec<ReportRow<'_>> = ranked.iter().map(|r| ReportRow::from(*r)).collect();
    Ok(serde_json::to_vec_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use warren_traits::{CriterionScore, StockMetrics, Ticker};

    fn scored(symbol: &str, score: f64) -> ScoredStock {
        let metrics = StockMetrics::new(Ticker::parse(symbol).unwrap(), format!("{symbol} Inc"))
            .with_pe_ratio(12.0)
            .with_roe_pct(22.5);
        ScoredStock::new(metrics, vec![CriterionScore::new("flat", score, 100.0)])
    }

    fn reporter() -> Reporter {
        Reporter::default()
            .with_generated_at(Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap())
    }

    fn csv_rows(bytes: &[u8]) -> Vec<csv::StringRecord> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes)
            .records()
            .collect::<std::result::Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_rank_by_score_then_ticker() {
        let records = vec![scored("MSFT", 70.0), scored("KO", 85.0), scored("AAPL", 70.0)];
        let ranked = reporter().rank(&records);
        let order: Vec<_> = ranked.iter().map(|r| r.ticker().as_str()).collect();
        assert_eq!(order, ["KO", "AAPL", "MSFT"]);
    }

    #[test]
    fn test_rank_applies_limit() {
        let records = vec![scored("A", 10.0), scored("B", 90.0), scored("C", 50.0)];
        let reporter = Reporter::new(ReportConfig::default().with_limit(Some(2)));
        let ranked = reporter.rank(&records);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].ticker().as_str(), "B");
        assert_eq!(ranked[1].ticker().as_str(), "C");
    }

    #[test]
    fn test_csv_output() {
        let records = vec![scored("KO", 85.0)];
        let bundle = reporter().generate(&records, &[]).unwrap();
        let rows = csv_rows(&bundle.csv);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), CSV_COLUMNS);
        assert_eq!(&rows[1][0], "KO");
        assert_eq!(&rows[1][1], "KO Inc");
        assert_eq!(&rows[1][2], "12.0");
        // missing metrics are empty fields
        assert_eq!(&rows[1][3], "");
        assert_eq!(&rows[1][4], "22.5");
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[1][7], "85");
        assert_eq!(&rows[1][8], "Strong candidate");
    }

    #[test]
    fn test_json_output() {
        let records = vec![scored("AAPL", 60.0), scored("KO", 85.0)];
        let bundle = reporter().generate(&records, &[]).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bundle.json).unwrap();

        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["ticker"], "KO");
        assert_eq!(rows[0]["score"], 85);
        assert_eq!(rows[0]["pe_ratio"], 12.0);
        assert!(rows[0]["eps_growth_pct"].is_null());
        assert_eq!(rows[1]["verdict"], "Worth watching");
    }

    #[test]
    fn test_non_finite_metrics_are_missing() {
        let metrics = StockMetrics::new(Ticker::parse("X").unwrap(), "X Corp")
            .with_pe_ratio(f64::NAN)
            .with_roe_pct(f64::INFINITY)
            .with_debt_to_equity(f64::NEG_INFINITY);
        let records = vec![ScoredStock::new(metrics, vec![])];
        let bundle = reporter().generate(&records, &[]).unwrap();

        let rows = csv_rows(&bundle.csv);
        assert_eq!(&rows[1][2], "");
        assert_eq!(&rows[1][4], "");
        assert_eq!(&rows[1][5], "");

        let json: serde_json::Value = serde_json::from_slice(&bundle.json).unwrap();
        assert!(json[0]["pe_ratio"].is_null());
        assert!(json[0]["roe_pct"].is_null());
    }

    #[test]
    fn test_empty_input_is_valid() {
        let bundle = reporter().generate(&[], &[]).unwrap();

        let rows = csv_rows(&bundle.csv);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), CSV_COLUMNS.len());

        let json: serde_json::Value = serde_json::from_slice(&bundle.json).unwrap();
        assert_eq!(json, serde_json::json!([]));

        assert!(bundle.text.contains("No results"));
        assert!(bundle.summary.is_empty());
    }

    #[test]
    fn test_write_overwrites_files() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(ReportConfig::default().with_output_dir(dir.path().join("out")));

        let first = reporter.generate(&[scored("KO", 85.0)], &[]).unwrap();
        reporter.write(&first).unwrap();

        let second = reporter.generate(&[], &[]).unwrap();
        let written = reporter.write(&second).unwrap();

        assert!(written.csv_path.ends_with("uncle_warren_recommendations.csv"));
        let json = fs::read_to_string(&written.json_path).unwrap();
        assert_eq!(json, "[]");
        let text = fs::read_to_string(&written.text_path).unwrap();
        assert_eq!(text, second.text);
        let csv = fs::read(&written.csv_path).unwrap();
        assert_eq!(csv_rows(&csv).len(), 1);
    }
}
