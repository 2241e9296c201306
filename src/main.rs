//! Sumi-Scout main entry point
//!
//! This is the command-line interface for the Sumi-Scout page search.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use sumi_scout::config::{collect_sources, load_config_with_hash, Config};
use sumi_scout::output::{format_json, format_status, format_text, print_statistics};
use sumi_scout::search::build_coordinator;
use tracing_subscriber::EnvFilter;

/// Sumi-Scout: on-demand search across a fixed list of pages
///
/// Every query fetches all configured sources live, counts how often each page
/// mentions the query, and prints the best matches with a snippet.
#[derive(Parser, Debug)]
#[command(name = "sumi-scout")]
#[command(version = "1.0.0")]
#[command(about = "On-demand search across a fixed list of pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Text to search for (at least 2 characters)
    #[arg(value_name = "QUERY", required_unless_present_any = ["status", "dry_run"])]
    query: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print results as JSON
    #[arg(long, conflicts_with_all = ["status", "dry_run"])]
    json: bool,

    /// Print per-source statistics after the results (text output only)
    #[arg(long, conflicts_with_all = ["json", "status", "dry_run"])]
    stats: bool,

    /// Show how many sources are configured and exit
    #[arg(long, conflicts_with = "dry_run")]
    status: bool,

    /// Validate config and list the sources without fetching anything
    #[arg(long, conflicts_with = "status")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let coordinator = build_coordinator(&config).context("Failed to build HTTP client")?;

    if cli.status {
        println!("{}", format_status(&coordinator.status()));
        return Ok(());
    }

    let Some(query) = cli.query.as_deref() else {
        bail!("A query is required");
    };

    let report = coordinator.run_query(query).await?;

    if cli.json {
        println!("{}", format_json(&report)?);
    } else {
        print!("{}", format_text(&report));
    }

    if cli.stats {
        println!();
        print_statistics(&report.statistics);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_scout=info,warn"),
            1 => EnvFilter::new("sumi_scout=debug,info"),
            2 => EnvFilter::new("sumi_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be searched
fn handle_dry_run(config: &Config) {
    println!("=== Sumi-Scout Dry Run ===\n");

    println!("Search Configuration:");
    println!(
        "  Max concurrent fetches: {}",
        config.search.max_concurrent_fetches
    );
    println!("  Fetch timeout: {}ms", config.search.fetch_timeout_ms);
    println!("  Max results: {}", config.search.max_results);

    println!("\nUser Agent:");
    println!("  {}", config.user_agent.browser);

    let sources = collect_sources(config);
    println!("\nSources ({}):", sources.len());
    if let Some(path) = &config.sources.list_path {
        println!("  (list file: {})", path.display());
    }
    for source in &sources {
        println!("  - {}", source);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Each query would fetch {} sources", sources.len());
}
