use serde::Deserialize;

/// Main configuration structure for Mal-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of items per listing page (the site pages in steps of 50)
    #[serde(rename = "page-size", default = "default_page_size")]
    pub page_size: u32,

    /// Total attempts one fetch call may spend before giving up
    #[serde(rename = "retry-limit", default = "default_retry_limit")]
    pub retry_limit: u32,

    /// Politeness pause between consecutive requests (milliseconds)
    #[serde(rename = "request-delay-ms", default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_page_size() -> u32 {
    50
}

fn default_retry_limit() -> u32 {
    20
}

fn default_request_delay_ms() -> u64 {
    3750
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the scraper
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV output file
    #[serde(rename = "csv-path")]
    pub csv_path: String,
}

/// One catalog to walk, in order
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Short name used in logs (e.g. "anime")
    pub name: String,

    /// Base search URL ending in the letter parameter
    /// (e.g. "https://myanimelist.net/anime.php?letter=")
    #[serde(rename = "base-url")]
    pub base_url: String,
}
