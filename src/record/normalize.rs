//! Per-field normalization rules
//!
//! Every raw field is coerced into its canonical representation here; the
//! sentinel stands in whenever a field is unset or a rule yields nothing.

use crate::record::{RawRecord, Record};

/// Placeholder for any missing or rejected field value
pub const SENTINEL: &str = "N/A";

/// Normalizes a raw record into its canonical form
pub fn normalize(raw: RawRecord) -> Record {
    Record {
        name: passthrough(raw.name),
        category: passthrough(raw.category),
        status: labeled_value(raw.status.as_deref()),
        release_info: labeled_value(raw.release_info.as_deref()),
        genres: joined_genres(&raw.genres),
        score: score_value(raw.score.as_deref()),
        members: counted_value(raw.members.as_deref()),
        rank: counted_value(raw.rank.as_deref()),
        popularity: counted_value(raw.popularity.as_deref()),
        synopsis: synopsis_value(raw.synopsis.as_deref()),
        image_url: passthrough(raw.image_url),
        quantity: quantity_value(raw.quantity.as_deref()),
    }
}

/// name, category, image_url: unchanged, sentinel if unset
fn passthrough(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| SENTINEL.to_string())
}

/// score: kept verbatim when at most 4 characters, else rejected outright
///
/// Garbled score text (e.g. "Not yet aired") is never partially parsed.
fn score_value(raw: Option<&str>) -> String {
    match raw {
        Some(score) if score.chars().count() <= 4 => score.to_string(),
        _ => SENTINEL.to_string(),
    }
}

/// members, rank, popularity: strip `#`, then first integer token
fn counted_value(raw: Option<&str>) -> String {
    raw.and_then(|value| first_integer(&value.replace('#', "")))
        .map(|n| n.to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}

/// quantity: first integer token, `#` left alone
fn quantity_value(raw: Option<&str>) -> String {
    raw.and_then(first_integer)
        .map(|n| n.to_string())
        .unwrap_or_else(|| SENTINEL.to_string())
}

/// genres: ordered list joined into one string
fn joined_genres(genres: &[String]) -> String {
    if genres.is_empty() {
        SENTINEL.to_string()
    } else {
        genres.join(", ")
    }
}

/// status, release_info: drop line breaks, keep what follows the first colon
fn labeled_value(raw: Option<&str>) -> String {
    raw.and_then(|value| {
        let flat = strip_line_breaks(value);
        flat.split_once(':')
            .map(|(_, rest)| rest.trim().to_string())
    })
    .unwrap_or_else(|| SENTINEL.to_string())
}

/// synopsis: line breaks removed, nothing else
fn synopsis_value(raw: Option<&str>) -> String {
    raw.map(strip_line_breaks)
        .unwrap_or_else(|| SENTINEL.to_string())
}

/// First whitespace-delimited token that reads as a non-negative integer
///
/// Comma digit grouping is accepted ("1,234" parses as 1234).
fn first_integer(value: &str) -> Option<u64> {
    value.split_whitespace().find_map(integer_token)
}

fn integer_token(token: &str) -> Option<u64> {
    if !token.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !token.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }
    token.replace(',', "").parse().ok()
}

fn strip_line_breaks(value: &str) -> String {
    value.replace(['\n', '\r'], "")
}
