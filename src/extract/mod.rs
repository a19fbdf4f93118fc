//! Rule-driven field extraction
//!
//! This module turns a parsed item page into a `RawRecord` by applying
//! the declarative rule table, and resolves the two listing-page lookups
//! (item anchors and the end-of-listing marker).

mod extractor;
mod rules;

pub use extractor::{extract_record, is_not_found, listing_item_urls};
pub use rules::{ElementRule, ImageRule, LabeledBlockRule, ListingRules, RuleSet};
