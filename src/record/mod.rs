//! Catalog item records and their CSV serialization
//!
//! A `RawRecord` is the extractor's output: every field optional, nothing
//! cleaned up yet. Normalization turns it into a `Record`, where every
//! field is either a concrete value or the `"N/A"` sentinel.

mod normalize;

pub use normalize::{normalize, SENTINEL};

/// Raw field values straight off the page, before normalization
///
/// Unset means the rule matched nothing; it is distinct from the sentinel
/// until normalization.
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub release_info: Option<String>,
    pub genres: Vec<String>,
    pub score: Option<String>,
    pub members: Option<String>,
    pub rank: Option<String>,
    pub popularity: Option<String>,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    pub quantity: Option<String>,
}

/// One normalized catalog item
///
/// Built fresh per item page, written to the sink, never mutated after.
/// The synopsis is kept on the record but does not appear in the CSV row
/// (the output format carries 11 columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub category: String,
    pub status: String,
    pub release_info: String,
    pub genres: String,
    pub score: String,
    pub members: String,
    pub rank: String,
    pub popularity: String,
    pub synopsis: String,
    pub image_url: String,
    pub quantity: String,
}

impl Record {
    /// CSV column labels, in serialization order
    pub const COLUMNS: [&'static str; 11] = [
        "name",
        "type",
        "status",
        "date",
        "genres",
        "score",
        "members",
        "rank",
        "popularity",
        "image",
        "quantity",
    ];

    /// The header line, written exactly once before any record
    pub fn header_line() -> String {
        Self::COLUMNS.join(", ")
    }

    /// Serializes the record as one CSV line
    ///
    /// Eleven double-quoted values joined by `", "`. Values are not
    /// RFC-escaped; normalization leaves no embedded quotes behind.
    pub fn to_line(&self) -> String {
        [
            &self.name,
            &self.category,
            &self.status,
            &self.release_info,
            &self.genres,
            &self.score,
            &self.members,
            &self.rank,
            &self.popularity,
            &self.image_url,
            &self.quantity,
        ]
        .iter()
        .map(|value| format!("\"{}\"", value))
        .collect::<Vec<_>>()
        .join(", ")
    }
}
