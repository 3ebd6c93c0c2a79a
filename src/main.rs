//! Moissonneur main entry point
//!
//! Command-line interface for the month-link crawler.

use anyhow::Context;
use clap::Parser;
use moissonneur::config::{load_config, validate, Config, ReportFormat};
use moissonneur::report::{build_report, print_report, write_link_list, write_markdown};
use moissonneur::Crawler;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

/// Moissonneur: a single-site month-link harvester
///
/// Crawls a website breadth-first, restricted to the start URL's host,
/// and reports every link whose text or URL mentions one of the recognized
/// months (Janvier, Février, Mars, Novembre, Décembre).
#[derive(Parser, Debug)]
#[command(name = "moissonneur")]
#[command(version = "1.0.0")]
#[command(about = "Crawl a site and classify its links by month keywords", long_about = None)]
struct Cli {
    /// Start URL; the crawl never leaves this URL's host
    #[arg(value_name = "URL")]
    url: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Politeness delay between requests, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Per-request timeout, in seconds
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Stop after attempting this many pages, failures included (0 = unlimited)
    #[arg(long, value_name = "N")]
    max_pages: Option<u64>,

    /// Write the report to this file in addition to stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Format for the report file
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

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

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    let crawler = Crawler::new(config.clone())?;

    // Ctrl-C sets the cancel flag; the loop finishes the current page and
    // reports the partial index instead of dropping accumulated results
    let cancel = crawler.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing current page then stopping");
            cancel.store(true, Ordering::Relaxed);
        }
    });

    let outcome = crawler.run(&cli.url).await?;
    let report = build_report(outcome);

    print_report(&report);

    if let Some(path) = config.output.report_path.as_deref() {
        match config.output.format {
            ReportFormat::Markdown => {
                write_markdown(&report, path)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                tracing::info!("Markdown report written to {}", path.display());
            }
            ReportFormat::Text => {
                let count = write_link_list(&report, path)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                tracing::info!("{} links written to {}", count, path.display());
            }
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
            0 => EnvFilter::new("moissonneur=info,warn"),
            1 => EnvFilter::new("moissonneur=debug,info"),
            2 => EnvFilter::new("moissonneur=trace,debug"),
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

/// Loads the config file (when given) and applies CLI overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(delay_ms) = cli.delay_ms {
        config.crawler.delay_ms = delay_ms;
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.crawler.timeout_secs = timeout_secs;
    }
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }
    if let Some(output) = &cli.output {
        config.output.report_path = Some(output.clone());
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    // Re-validate after overrides; CLI values get the same checks as the file
    validate(&config)?;

    Ok(config)
}
