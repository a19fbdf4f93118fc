//! Mal-Harvest main entry point
//!
//! Command-line interface for the MyAnimeList catalog scraper.

use anyhow::Context;
use clap::Parser;
use mal_harvest::config::load_config;
use mal_harvest::crawler::{alpha_keys, crawl};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mal-Harvest: a catalog-to-CSV scraper
///
/// Walks the paginated MyAnimeList catalog, follows every per-title
/// detail page, and writes one quoted CSV row per title.
#[derive(Parser, Debug)]
#[command(name = "mal-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A catalog-to-CSV scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the crawl plan without any requests
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = load_config(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mal_harvest=info,warn"),
            1 => EnvFilter::new("mal_harvest=debug,info"),
            2 => EnvFilter::new("mal_harvest=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the plan
fn handle_dry_run(config: &mal_harvest::config::Config) {
    println!("=== Mal-Harvest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Page size: {}", config.crawler.page_size);
    println!("  Retry limit: {}", config.crawler.retry_limit);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);

    println!("\nOutput:");
    println!("  CSV file: {}", config.output.csv_path);

    println!("\nCatalogs ({}):", config.catalog.len());
    for entry in &config.catalog {
        println!("  - {} ({})", entry.name, entry.base_url);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would walk {} catalogs x {} keys",
        config.catalog.len(),
        alpha_keys().len()
    );
}

/// Handles the main crawl operation
async fn handle_crawl(config: mal_harvest::config::Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl: {} catalogs, output to {}",
        config.catalog.len(),
        config.output.csv_path
    );

    match crawl(config).await {
        Ok(()) => {
            tracing::info!("Crawl completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
