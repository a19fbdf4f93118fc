//! Crawling layer: HTTP fetching and crawl coordination
//!
//! This module contains:
//! - HTTP fetching with bounded retry
//! - The sequential pagination loop over catalogs, keys, and offsets

mod coordinator;
mod fetcher;

pub use coordinator::{alpha_keys, Coordinator};
pub use fetcher::{build_http_client, fetch_with_retry, FetchError};

use crate::config::Config;
use crate::output::CsvFileSink;
use crate::HarvestError;
use std::path::Path;

/// Runs a complete crawl, writing the CSV file named in the config
///
/// This is the main entry point for the binary: it opens the output
/// file, builds the coordinator, and walks every configured catalog.
///
/// # Arguments
///
/// * `config` - The validated crawl configuration
///
/// # Returns
///
/// * `Ok(())` - Crawl completed, every catalog exhausted
/// * `Err(HarvestError)` - A fetch ran out of retries or output failed
pub async fn crawl(config: Config) -> Result<(), HarvestError> {
    let sink = CsvFileSink::create(Path::new(&config.output.csv_path))?;
    let mut coordinator = Coordinator::new(config, sink)?;
    coordinator.run().await
}
