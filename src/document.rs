//! Read-only view over a parsed HTML page.
//!
//! [`Document`] wraps a [`scraper::Html`] tree and exposes the handful of lookups the
//! resolvers need: first match, all matches, `<meta>` content and element text.
//! Nothing here mutates the tree.

use crate::error::{ExtractError, Result};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static META_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("meta[name]").unwrap());

/// A parsed HTML page handed to the extractor.
///
/// ```rust
/// use elibraryrs::Document;
///
/// let doc = Document::parse(r#"<html><head><meta name="description" content="x"></head></html>"#);
/// assert_eq!(doc.meta_content("description").as_deref(), Some("x"));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw HTML into a document. Parsing is lenient and never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Wrap an already parsed tree
    pub fn from_html(html: Html) -> Self {
        Self { html }
    }

    /// First element matching `selector`, in document order.
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// Every element matching `selector`, in document order.
    pub fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }

    /// `content` attribute of the first `<meta name="...">` with the given name.
    ///
    /// A tag without `content` yields an empty string, an absent tag yields `None`.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.html
            .select(&META_SELECTOR)
            .find(|meta| meta.value().attr("name") == Some(name))
            .map(|meta| meta.value().attr("content").unwrap_or("").to_string())
    }
}

/// Concatenated text of the element and all its descendants.
pub fn inner_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// The element's first direct child text node, if it has one.
pub fn first_text<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element
        .children()
        .find_map(|child| child.value().as_text())
        .map(|text| &**text)
}

/// Compile a CSS selector taken from configuration.
pub fn compile_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector(format!("{:?}: {:?}", css, e)))
}
