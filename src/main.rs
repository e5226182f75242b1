//! Sumi-Seek main entry point
//!
//! This is the command-line interface for the Sumi-Seek search crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sumi_seek::config::{load_file_config, resolve_config, Config, FileConfig, Overrides};
use sumi_seek::crawler::crawl_until;
use sumi_seek::output::{generate_markdown_summary, print_report};
use tracing_subscriber::EnvFilter;

/// Sumi-Seek: search a website for a string
///
/// Sumi-Seek searches the given string on every page linked from the base URL that
/// lives on the same host, and, in recursive mode, on every page reachable from there.
#[derive(Parser, Debug)]
#[command(name = "sumi-seek")]
#[command(version)]
#[command(about = "Search a website's pages for a string", long_about = None)]
struct Cli {
    /// The base URL to start from
    #[arg(value_name = "LINK")]
    link: String,

    /// The string to search for
    #[arg(short, long)]
    search_string: String,

    /// Also match regardless of letter case
    #[arg(short = 'i', long)]
    case_insensitive: bool,

    /// Also follow the links found on every searched page
    #[arg(short, long)]
    recursive: bool,

    /// Number of already visited or foreign links in a row allowed before the search stops
    /// [default: 20]
    #[arg(short, long)]
    limit: Option<u32>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Also write a markdown summary to this file
    #[arg(long, value_name = "FILE")]
    summary: Option<PathBuf>,

    /// Print the report without ANSI colours
    #[arg(long)]
    no_color: bool,

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

    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_file_config(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => FileConfig::default(),
    };

    let overrides = Overrides {
        case_insensitive: cli.case_insensitive,
        recursive: cli.recursive,
        skip_limit: cli.limit,
        summary_path: cli.summary.clone(),
        no_color: cli.no_color,
    };

    let config = resolve_config(&cli.link, &cli.search_string, file_config, overrides)
        .context("Invalid configuration")?;

    handle_search(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_seek=info,warn"),
            1 => EnvFilter::new("sumi_seek=debug,info"),
            2 => EnvFilter::new("sumi_seek=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the search and reports exactly once, however it ends
async fn handle_search(config: Config) -> anyhow::Result<()> {
    if !config.output.color {
        colored::control::set_override(false);
    }

    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for interrupt: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let report = crawl_until(&config, interrupt)
        .await
        .context("Failed to build HTTP client")?;

    print_report(&report, config.output.color).context("Failed to print report")?;

    if let Some(path) = &config.output.summary_path {
        generate_markdown_summary(&report, path)
            .with_context(|| format!("Failed to write summary {}", path.display()))?;
        tracing::info!("Summary written to: {}", path.display());
    }

    Ok(())
}
