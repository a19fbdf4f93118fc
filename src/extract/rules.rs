//! Declarative extraction rule table
//!
//! One immutable `RuleSet` describes where every field of a catalog item
//! lives in the page markup. The standard table targets the MyAnimeList
//! layout (as rendered in late 2020).

use crate::page::AttrMatcher;

/// Locator for a single element: tag name plus attribute predicate
#[derive(Debug, Clone)]
pub struct ElementRule {
    pub tag: &'static str,
    pub attr: &'static str,
    pub matcher: AttrMatcher,
}

impl ElementRule {
    fn exact(tag: &'static str, attr: &'static str, value: &str) -> Self {
        Self {
            tag,
            attr,
            matcher: AttrMatcher::Exact(value.to_string()),
        }
    }

    fn prefix(tag: &'static str, attr: &'static str, value: &str) -> Self {
        Self {
            tag,
            attr,
            matcher: AttrMatcher::Prefix(value.to_string()),
        }
    }
}

/// Locator for a field whose value sits next to a label inside a shared
/// container
///
/// Several page blocks share one tag + attribute; the label substrings
/// identify which block holds the field. The matched label element is
/// only used to find the container; the raw value is the container text.
#[derive(Debug, Clone)]
pub struct LabeledBlockRule {
    pub element: ElementRule,
    pub labels: &'static [&'static str],
    pub container_tag: &'static str,
}

/// Locator for the item image
///
/// The image is found by matching one attribute against the already
/// resolved item name, and the raw value is read from another attribute.
#[derive(Debug, Clone)]
pub struct ImageRule {
    pub tag: &'static str,
    pub match_attr: &'static str,
    pub value_attr: &'static str,
}

/// Locators used on listing pages
#[derive(Debug, Clone)]
pub struct ListingRules {
    /// Anchors pointing at item detail pages
    pub item_link: ElementRule,

    /// Attribute holding the item URL
    pub href_attr: &'static str,

    /// Marker element the site renders past the last page
    pub not_found: ElementRule,
}

/// The full rule table applied to every item page
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub name: ElementRule,
    pub category: ElementRule,
    pub score: ElementRule,
    pub rank: ElementRule,
    pub members: ElementRule,
    pub popularity: ElementRule,
    pub synopsis: ElementRule,
    pub genres: ElementRule,
    pub image: ImageRule,
    pub status: LabeledBlockRule,
    pub release_info: LabeledBlockRule,
    pub quantity: LabeledBlockRule,
    pub listing: ListingRules,
}

impl RuleSet {
    /// The standard MyAnimeList rule table
    pub fn standard() -> Self {
        let dark_text = ElementRule::exact("span", "class", "dark_text");

        Self {
            name: ElementRule::exact("span", "itemprop", "name"),
            category: ElementRule::exact("span", "class", "information type"),
            score: ElementRule::prefix("div", "class", "score-label score"),
            rank: ElementRule::exact("span", "class", "numbers ranked"),
            members: ElementRule::exact("span", "class", "numbers members"),
            popularity: ElementRule::exact("span", "class", "numbers popularity"),
            synopsis: ElementRule::exact("p", "itemprop", "description"),
            genres: ElementRule::exact("span", "itemprop", "genre"),
            image: ImageRule {
                tag: "img",
                match_attr: "alt",
                value_attr: "data-src",
            },
            status: LabeledBlockRule {
                element: dark_text.clone(),
                labels: &["Status"],
                container_tag: "div",
            },
            release_info: LabeledBlockRule {
                element: dark_text.clone(),
                labels: &["Aired", "Published"],
                container_tag: "div",
            },
            quantity: LabeledBlockRule {
                element: dark_text,
                labels: &["Chapters", "Episodes"],
                container_tag: "div",
            },
            listing: ListingRules {
                item_link: ElementRule::prefix("a", "class", "hoverinfo_trigger fw-b"),
                href_attr: "href",
                not_found: ElementRule::exact("div", "class", "error404"),
            },
        }
    }
}
