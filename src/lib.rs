//! Mal-Harvest: a catalog-to-CSV scraper for MyAnimeList
//!
//! This crate walks the paginated MyAnimeList catalog (anime and manga),
//! follows every per-title detail page, extracts structured fields with a
//! declarative rule table, normalizes the raw strings, and streams one
//! quoted CSV row per title to an output sink.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod page;
pub mod record;

use thiserror::Error;

/// Main error type for Mal-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] crawler::FetchError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Mal-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use page::{AttrMatcher, Document};
pub use record::{RawRecord, Record, SENTINEL};
