//! Output configuration for the reporter.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default CSV file name.
pub const DEFAULT_CSV_FILE: &str = "uncle_warren_recommendations.csv";
/// Default text report file name.
pub const DEFAULT_TEXT_FILE: &str = "uncle_warren_report.txt";
/// Default JSON file name.
pub const DEFAULT_JSON_FILE: &str = "uncle_warren_data.json";

/// Where and how much the reporter writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the three files are written to (default: working directory)
    pub output_dir: PathBuf,

    /// CSV file name
    pub csv_file: String,

    /// Text report file name
    pub text_file: String,

    /// JSON file name
    pub json_file: String,

    /// Keep only the top N ranked stocks (default: all)
    pub limit: Option<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            csv_file: DEFAULT_CSV_FILE.to_string(),
            text_file: DEFAULT_TEXT_FILE.to_string(),
            json_file: DEFAULT_JSON_FILE.to_string(),
            limit: None,
        }
    }
}

impl ReportConfig {
    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Keep only the top `limit` stocks.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Full path of the CSV file.
    #[must_use]
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_file)
    }

    /// Full path of the text report.
    #[must_use]
    pub fn text_path(&self) -> PathBuf {
        self.output_dir.join(&self.text_file)
    }

    /// Full path of the JSON file.
    #[must_use]
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }
}
