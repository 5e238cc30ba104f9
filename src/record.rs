//! The structured result of one extraction.
//!
//! ## Example
//!
//! ```rust
//! use elibraryrs::{Document, Extractor};
//!
//! let html = r#"<html><head><title>Статья</title></head><body></body></html>"#;
//! let record = Extractor::new(None).extract(&Document::parse(html), "https://elibrary.ru/item.asp?id=1");
//!
//! assert_eq!(record.title(), "Статья");
//! if !record.has_authors() {
//!     println!("authors: {}", record.authors());
//! }
//! ```

use crate::constants::{AUTHORS_LOOKUP_ERROR, AUTHORS_NOT_FOUND, TITLE_NOT_FOUND};
use serde::{Deserialize, Serialize};

/// Title, author list and source locator of one article.
///
/// Neither `title` nor `authors` is ever empty: when a value could not be
/// determined it holds a sentinel string instead. Use [`has_title`](Self::has_title)
/// and [`has_authors`](Self::has_authors) to tell the two apart.
///
/// The record is built once and not modified afterwards; fields are read through
/// accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleRecord {
    title: String,
    authors: String,
    source_reference: String,
}

impl ArticleRecord {
    pub fn new(
        title: impl Into<String>,
        authors: impl Into<String>,
        source_reference: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors: authors.into(),
            source_reference: source_reference.into(),
        }
    }

    /// Article title, possibly cut and suffixed with `...`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Human-readable author list, or a sentinel.
    pub fn authors(&self) -> &str {
        &self.authors
    }

    /// The locator the record was extracted for, unchanged.
    pub fn source_reference(&self) -> &str {
        &self.source_reference
    }

    /// `false` when the title is the "not found" sentinel.
    pub fn has_title(&self) -> bool {
        self.title != TITLE_NOT_FOUND
    }

    /// `false` when the authors field holds either sentinel.
    pub fn has_authors(&self) -> bool {
        self.authors != AUTHORS_NOT_FOUND && self.authors != AUTHORS_LOOKUP_ERROR
    }
}
