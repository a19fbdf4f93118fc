//! Typed document-query interface over parsed HTML
//!
//! This module wraps `scraper::Html` behind the small set of lookups the
//! extraction rules need:
//! - find-first / find-all by tag name plus attribute predicate
//! - node text and attribute access
//! - nearest enclosing ancestor of a given tag
//!
//! Attribute predicates are either exact-string equality or a prefix
//! match, compiled down to CSS attribute selectors.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Errors raised while turning a response body into a document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Response body is empty")]
    EmptyBody,
}

/// Predicate applied to a single attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatcher {
    /// The attribute value must equal the string exactly
    Exact(String),

    /// The attribute value must start with the string
    Prefix(String),
}

impl AttrMatcher {
    /// Renders the predicate as a CSS selector for the given tag/attribute
    fn to_css(&self, tag: &str, attr: &str) -> String {
        match self {
            AttrMatcher::Exact(value) => {
                format!(r#"{}[{}="{}"]"#, tag, attr, escape_css_string(value))
            }
            AttrMatcher::Prefix(value) => {
                format!(r#"{}[{}^="{}"]"#, tag, attr, escape_css_string(value))
            }
        }
    }
}

/// A parsed HTML page offering structural lookups
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a response body into a queryable document
    ///
    /// The HTML5 parser is lenient, so the only body it rejects is an
    /// empty (or whitespace-only) one.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        if body.trim().is_empty() {
            return Err(ParseError::EmptyBody);
        }

        Ok(Self {
            html: Html::parse_document(body),
        })
    }

    /// Returns the first element matching tag + attribute predicate, if any
    pub fn find_first(&self, tag: &str, attr: &str, matcher: &AttrMatcher) -> Option<ElementRef<'_>> {
        let selector = compile_selector(tag, attr, matcher)?;
        self.html.select(&selector).next()
    }

    /// Returns all matching elements in document order
    pub fn find_all(&self, tag: &str, attr: &str, matcher: &AttrMatcher) -> Vec<ElementRef<'_>> {
        match compile_selector(tag, attr, matcher) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// Returns the innermost enclosing element of the given tag
    pub fn nearest_ancestor<'a>(
        &self,
        node: ElementRef<'a>,
        tag: &str,
    ) -> Option<ElementRef<'a>> {
        node.ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == tag)
    }
}

/// Concatenated text content of a node and its descendants
pub fn node_text(node: ElementRef<'_>) -> String {
    node.text().collect()
}

/// Value of a single attribute on the node, if present
pub fn node_attr(node: ElementRef<'_>, name: &str) -> Option<String> {
    node.value().attr(name).map(str::to_string)
}

/// Compiles a tag + predicate pair into a selector
///
/// Rule tables are crate-defined, so a selector that fails to parse is a
/// bug in the table; it is logged and treated as matching nothing.
fn compile_selector(tag: &str, attr: &str, matcher: &AttrMatcher) -> Option<Selector> {
    let css = matcher.to_css(tag, attr);
    match Selector::parse(&css) {
        Ok(selector) => return Some(selector),
        Err(e) => tracing::debug!("Invalid selector '{}': {}", css, e),
    }
    None
}

/// Escapes a value for embedding in a double-quoted CSS attribute string
fn escape_css_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
