//! Crawl coordinator - the nested pagination loop
//!
//! The coordinator drives four nested levels, outermost to innermost:
//! catalog base URL, alphabetical key (`.` then `A`..`Z`), page offset
//! (0, +page-size), item URL. Every item page goes through fetch, parse,
//! extract, normalize and is streamed to the sink as one row.
//!
//! Exactly one request is in flight at any time; the only suspension
//! points are the awaited fetch and the politeness pause between
//! requests.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_with_retry};
use crate::extract::{extract_record, is_not_found, listing_item_urls, RuleSet};
use crate::output::RecordSink;
use crate::page::Document;
use crate::record::normalize;
use crate::HarvestError;
use reqwest::Client;
use std::time::Duration;

/// Query parameter appended after the alphabetical key
const PAGE_QUERY_PARAM: &str = "&show";

/// The alphabetical search keys, in crawl order: `.` then `A`..`Z`
pub fn alpha_keys() -> Vec<char> {
    std::iter::once('.').chain('A'..='Z').collect()
}

/// Crawl coordinator owning the client, the rule table, and the sink
pub struct Coordinator<S: RecordSink> {
    config: Config,
    client: Client,
    rules: RuleSet,
    sink: S,
}

impl<S: RecordSink> Coordinator<S> {
    /// Creates a new coordinator
    ///
    /// All tuning (page size, retry limit, delay, catalogs) comes from
    /// the configuration passed in here.
    pub fn new(config: Config, sink: S) -> Result<Self, HarvestError> {
        let client = build_http_client(&config.user_agent)?;

        Ok(Self {
            config,
            client,
            rules: RuleSet::standard(),
            sink,
        })
    }

    /// Runs the full crawl
    ///
    /// Writes the header once, then walks every catalog and key. The
    /// crawl finishes Ok when all catalogs are exhausted; it returns the
    /// fetch error the moment any single fetch runs out of retries. The
    /// sink is flushed on both paths, so rows written before an abort
    /// survive it.
    pub async fn run(&mut self) -> Result<(), HarvestError> {
        self.sink.write_header()?;

        let result = self.walk_catalogs().await;
        self.sink.flush()?;
        result
    }

    /// The catalog x key walk itself, separated so `run` can flush
    /// whether or not it completes
    async fn walk_catalogs(&mut self) -> Result<(), HarvestError> {
        let catalogs = self.config.catalog.clone();
        let keys = alpha_keys();

        for catalog in &catalogs {
            tracing::info!("Crawling catalog '{}'", catalog.name);

            for (i, key) in keys.iter().enumerate() {
                tracing::info!(
                    "Catalog '{}': key '{}' ({}/{})",
                    catalog.name,
                    key,
                    i + 1,
                    keys.len()
                );
                self.crawl_key(&catalog.base_url, *key).await?;
            }
        }

        Ok(())
    }

    /// Walks the page offsets for one catalog/key pair
    ///
    /// The offset loop ends when the site renders its "not found" marker
    /// or the listing body cannot be parsed at all; both are normal
    /// control flow, not errors.
    async fn crawl_key(&mut self, base_url: &str, key: char) -> Result<(), HarvestError> {
        let mut offset: u32 = 0;

        loop {
            let listing_url = format!("{}{}{}={}", base_url, key, PAGE_QUERY_PARAM, offset);
            tracing::debug!("Fetching listing {}", listing_url);

            let body = fetch_with_retry(
                &self.client,
                &listing_url,
                None,
                self.config.crawler.retry_limit,
            )
            .await?;

            let doc = match Document::parse(&body) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::debug!("Listing {} not parseable ({}), ending key", listing_url, e);
                    break;
                }
            };

            if is_not_found(&doc, &self.rules) {
                tracing::debug!("Listing {} carries the not-found marker", listing_url);
                break;
            }

            let item_urls = listing_item_urls(&doc, &self.rules);
            tracing::debug!("Listing {} has {} items", listing_url, item_urls.len());

            for item_url in &item_urls {
                self.pause().await;
                self.process_item(item_url).await?;
            }

            self.pause().await;
            offset += self.config.crawler.page_size;
        }

        Ok(())
    }

    /// Fetches, extracts, normalizes, and writes a single item
    ///
    /// Retry exhaustion propagates and aborts the whole crawl. A body
    /// that cannot be parsed skips the item without a record.
    async fn process_item(&mut self, url: &str) -> Result<(), HarvestError> {
        let body =
            fetch_with_retry(&self.client, url, None, self.config.crawler.retry_limit).await?;

        let doc = match Document::parse(&body) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Skipping item {}: {}", url, e);
                return Ok(());
            }
        };

        let raw = extract_record(&doc, &self.rules);
        let record = normalize(raw);

        tracing::debug!("Harvested '{}' from {}", record.name, url);
        self.sink.write_record(&record)?;

        Ok(())
    }

    /// Fixed politeness pause between consecutive requests
    async fn pause(&self) {
        let delay = self.config.crawler.request_delay_ms;
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
    }

    /// Consumes the coordinator, handing back the sink
    pub fn into_sink(self) -> S {
        self.sink
    }
}
