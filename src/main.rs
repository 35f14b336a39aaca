//! Page-Survey main entry point
//!
//! This is the command-line interface for the Page-Survey metadata
//! surveyor.

use anyhow::Context;
use clap::Parser;
use page_survey::config::load_config;
use page_survey::survey::run_batch;
use page_survey::{output, Config};
use std::io::BufRead;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Survey: a concurrent page metadata surveyor
///
/// Page-Survey fetches every given URL concurrently, extracts the page
/// title, meta description, and h1-h3 headings, and prints one JSON record
/// per URL. Unreachable pages produce degraded records instead of errors.
#[derive(Parser, Debug)]
#[command(name = "page-survey")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent page metadata surveyor", long_about = None)]
struct Cli {
    /// URLs to survey; read from stdin, one per line, when omitted
    #[arg(value_name = "URLS")]
    urls: Vec<String>,

    /// Read URLs from a file, one per line
    #[arg(long, value_name = "PATH", conflicts_with = "urls")]
    urls_file: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to defaults when no file is given
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => Config::default(),
    };

    // Source the URL list; an unreadable source aborts here, before any
    // fetch task launches
    let urls = collect_urls(&cli)?;
    tracing::info!("Surveying {} URL(s)", urls.len());

    let records = run_batch(&config, urls).await?;

    match &cli.output {
        Some(path) => {
            output::write_records_to_path(path, &records)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!("Report written to: {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            output::write_records(&mut stdout, &records)?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_survey=info,warn"),
            1 => EnvFilter::new("page_survey=debug,info"),
            2 => EnvFilter::new("page_survey=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Collects the URL sequence from arguments, a file, or stdin
///
/// Blank lines and surrounding whitespace are dropped; URL contents are
/// otherwise passed through unvalidated.
fn collect_urls(cli: &Cli) -> anyhow::Result<Vec<String>> {
    if let Some(path) = &cli.urls_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read URL list from {}", path.display()))?;
        return Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect());
    }

    if !cli.urls.is_empty() {
        return Ok(cli.urls.clone());
    }

    tracing::debug!("No URLs on the command line, reading from stdin");
    let stdin = std::io::stdin();
    let mut urls = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read URLs from stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urls.push(trimmed.to_string());
        }
    }
    Ok(urls)
}
