//! Uncle Warren CLI binary.
//!
//! Screens stocks against Buffett's principles and writes ranked reports.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::{path::PathBuf, process};
use tracing_subscriber::EnvFilter;
use warren_report::ReportConfig;

#[derive(Parser)]
#[command(name = "uncle-warren")]
#[command(about = "Screen stocks the way Warren Buffett might", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen a list of tickers and write CSV, JSON and text reports (default)
    Screen(ScreenArgs),

    /// Score a single ticker with a full breakdown
    Score {
        /// Ticker symbol
        ticker: String,

        /// Use the bundled snapshot instead of fetching from Finviz
        #[arg(long)]
        offline: bool,
    },

    /// List the scoring criteria
    Criteria {
        /// Show a single criterion by name or alias (e.g. roe, pe, moat)
        name: Option<String>,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Serve the single-ticker web form
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = cmd::serve::DEFAULT_PORT)]
        port: u16,

        /// Use the bundled snapshot instead of fetching from Finviz
        #[arg(long)]
        offline: bool,
    },
}

#[derive(Args, Debug, Default)]
struct ScreenArgs {
    /// Ticker symbols (defaults to the curated universe)
    #[arg(short, long, value_delimiter = ',')]
    tickers: Vec<String>,

    /// Use the bundled snapshot instead of fetching from Finviz
    #[arg(long)]
    offline: bool,

    /// Directory for the report files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Only report the N best-scoring stocks
    #[arg(long)]
    top: Option<usize>,
}

impl ScreenArgs {
    fn into_config(self) -> cmd::screen::ScreenConfig {
        let mut config = cmd::screen::ScreenConfig::default();
        if !self.tickers.is_empty() {
            config.tickers = self.tickers;
        }
        config.offline = self.offline;

        let mut report = ReportConfig::default().with_limit(self.top);
        if let Some(dir) = self.output_dir {
            report = report.with_output_dir(dir);
        }
        config.report = report;
        config
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let default_level = match cli.command {
        Some(Commands::Serve { .. }) => "info",
        _ => "warn",
    };
    init_logging(cli.log_level.as_deref().unwrap_or(default_level));

    match cli.command.unwrap_or_else(|| Commands::Screen(ScreenArgs::default())) {
        Commands::Screen(args) => {
            cmd::screen::screen(args.into_config()).await?;
        }
        Commands::Score { ticker, offline } => {
            cmd::score::show_score(&ticker, offline).await?;
        }
        Commands::Criteria { name, category } => {
            cmd::criteria::list_criteria(name, category)?;
        }
        Commands::Serve { port, offline } => {
            cmd::serve::serve(port, offline).await?;
        }
    }

    Ok(())
}

/// Route tracing output to stderr, honouring `RUST_LOG` when set.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_runs_screen() {
        let cli = Cli::try_parse_from(["uncle-warren"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_screen_args() {
        let cli = Cli::try_parse_from([
            "uncle-warren",
            "screen",
            "--tickers",
            "ko,brk.b",
            "--offline",
            "--top",
            "5",
            "-o",
            "out",
        ])
        .unwrap();

        let Some(Commands::Screen(args)) = cli.command else {
            panic!("expected screen command");
        };
        let config = args.into_config();
        assert_eq!(config.tickers, ["ko", "brk.b"]);
        assert!(config.offline);
        assert_eq!(config.report.limit, Some(5));
        assert_eq!(config.report.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_screen_defaults() {
        let config = ScreenArgs::default().into_config();
        assert_eq!(config.tickers.len(), 12);
        assert!(!config.offline);
        assert_eq!(config.report.limit, None);
    }

    #[test]
    fn test_criteria_args() {
        let cli = Cli::try_parse_from(["uncle-warren", "criteria", "-c", "growth"]).unwrap();
        let Some(Commands::Criteria { name, category }) = cli.command else {
            panic!("expected criteria command");
        };
        assert!(name.is_none());
        assert_eq!(category.as_deref(), Some("growth"));

        let cli = Cli::try_parse_from(["uncle-warren", "criteria", "roe"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Criteria { name: Some(n), category: None }) if n == "roe"
        ));
    }

    #[test]
    fn test_serve_default_port() {
        let cli = Cli::try_parse_from(["uncle-warren", "serve", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(
            cli.command,
            Some(Commands::Serve {
                port: 5050,
                offline: false
            })
        ));
    }

    #[test]
    fn test_score_requires_ticker() {
        assert!(Cli::try_parse_from(["uncle-warren", "score"]).is_err());
        let cli = Cli::try_parse_from(["uncle-warren", "score", "KO", "--offline"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Score { ref ticker, offline: true }) if ticker == "KO"
        ));
    }
}
