//! Applies the rule table to a parsed item page

use crate::extract::rules::{ElementRule, LabeledBlockRule, RuleSet};
use crate::page::{node_attr, node_text, AttrMatcher, Document};
use crate::record::RawRecord;

/// Extracts the raw (unnormalized) field values from an item page
///
/// Fields are independent of one another except the image, which is
/// located by matching its `alt` attribute against the already resolved
/// name. Fields with no match stay unset; the sentinel substitution
/// happens later, in normalization.
pub fn extract_record(doc: &Document, rules: &RuleSet) -> RawRecord {
    let name = plain_text(doc, &rules.name);

    let image_url = name.as_deref().and_then(|name| {
        let matcher = AttrMatcher::Exact(name.to_string());
        doc.find_first(rules.image.tag, rules.image.match_attr, &matcher)
            .and_then(|node| node_attr(node, rules.image.value_attr))
    });

    let genres = doc
        .find_all(rules.genres.tag, rules.genres.attr, &rules.genres.matcher)
        .into_iter()
        .map(node_text)
        .collect();

    RawRecord {
        name,
        category: plain_text(doc, &rules.category),
        status: labeled_block_text(doc, &rules.status),
        release_info: labeled_block_text(doc, &rules.release_info),
        genres,
        score: plain_text(doc, &rules.score),
        members: plain_text(doc, &rules.members),
        rank: plain_text(doc, &rules.rank),
        popularity: plain_text(doc, &rules.popularity),
        synopsis: plain_text(doc, &rules.synopsis),
        image_url,
        quantity: labeled_block_text(doc, &rules.quantity),
    }
}

/// Ordered item URLs found on a listing page
pub fn listing_item_urls(doc: &Document, rules: &RuleSet) -> Vec<String> {
    let link = &rules.listing.item_link;
    doc.find_all(link.tag, link.attr, &link.matcher)
        .into_iter()
        .filter_map(|node| node_attr(node, rules.listing.href_attr))
        .collect()
}

/// Whether the listing page carries the site's "not found" marker
pub fn is_not_found(doc: &Document, rules: &RuleSet) -> bool {
    let marker = &rules.listing.not_found;
    doc.find_first(marker.tag, marker.attr, &marker.matcher)
        .is_some()
}

/// Text of the first matching element; empty text counts as unset
fn plain_text(doc: &Document, rule: &ElementRule) -> Option<String> {
    doc.find_first(rule.tag, rule.attr, &rule.matcher)
        .map(node_text)
        .filter(|text| !text.is_empty())
}

/// Resolves a label-disambiguated block to its container text
///
/// Candidates are scanned in document order; the first one whose text
/// contains any label wins, and the value is the text of its nearest
/// enclosing container. The label element itself is discarded.
fn labeled_block_text(doc: &Document, rule: &LabeledBlockRule) -> Option<String> {
    let element = &rule.element;
    for candidate in doc.find_all(element.tag, element.attr, &element.matcher) {
        let text = node_text(candidate);
        for label in rule.labels {
            if text.contains(label) {
                return doc
                    .nearest_ancestor(candidate, rule.container_tag)
                    .map(node_text);
            }
        }
    }
    None
}
