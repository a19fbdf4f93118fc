//! Configuration loading and validation
//!
//! Configuration is a TOML file with kebab-case keys covering the crawl
//! tuning constants (page size, retry limit, politeness delay), the
//! user-agent identification block, the output path, and the ordered list
//! of catalogs to walk.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{CatalogEntry, Config, CrawlerConfig, OutputConfig, UserAgentConfig};
pub use validation::validate;
