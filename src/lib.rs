//! # elibraryrs
//!
//! Heuristic extraction of article titles and author lists from eLIBRARY.ru pages
//! and similar Russian-language bibliographic HTML.
//!
//! ## Overview
//!
//! Pages from scientific catalogues rarely share one markup. elibraryrs walks an
//! ordered chain of extraction strategies and falls back gracefully when expected
//! markup is missing. The result is always an [`ArticleRecord`] whose title and
//! author fields are non-empty: values that could not be determined are replaced by
//! sentinel strings, never by errors.
//!
//! ## Key Features
//!
//! - **Title resolution**: `<title>` (length-limited), then the first `<h1>`
//! - **Author resolution**: meta description cut at journal name or year, the
//!   labelled `Авторы:` table cell, then emphasised text
//! - **Author-list validation**: Cyrillic initials with a denylist of journal and
//!   boilerplate markers
//! - **Text normalization**: entity decoding and whitespace cleanup
//! - **Optional fetching** (feature `fetch`): browser-like HTTP profile with
//!   deterministic fallback records
//!
//! ## Basic Usage
//!
//! ```rust
//! use elibraryrs::{Document, Extractor};
//!
//! let html = r#"
//!     <html><head><title>Статья</title></head>
//!     <body><b>Иванов А.А., Петров Б.В.</b></body></html>
//! "#;
//!
//! let record = Extractor::new(None).extract(&Document::parse(html), "https://elibrary.ru/item.asp?id=1");
//! assert_eq!(record.title(), "Статья");
//! assert_eq!(record.authors(), "Иванов А.А., Петров Б.В.");
//! ```
//!
//! ## Sentinels
//!
//! | Situation                    | Field     | Value                          |
//! |------------------------------|-----------|--------------------------------|
//! | no `<title>` nor `<h1>`      | `title`   | `"title not found"`            |
//! | no strategy found authors    | `authors` | `"authors not found"`          |
//! | author lookup failed         | `authors` | `"error during author lookup"` |
//!
//! [`ArticleRecord::has_title`] and [`ArticleRecord::has_authors`] check for them.

mod authors;
mod constants;
mod document;
mod error;
mod extractor;
mod fallback;
#[cfg(feature = "fetch")]
mod fetch;
mod normalize;
mod options;
mod record;
mod title;
mod utils;
mod validator;

// Public exports
pub use authors::{lookup_authors, resolve_authors, resolve_authors_with, AuthorLookup};
pub use constants::{AUTHORS_LOOKUP_ERROR, AUTHORS_NOT_FOUND, TITLE_NOT_FOUND};
pub use document::{compile_selector, first_text, inner_text, Document};
pub use error::{ExtractError, Result};
pub use extractor::{extract, Extractor};
pub use fallback::fallback_record;
#[cfg(feature = "fetch")]
pub use fetch::ArticleFetcher;
pub use normalize::normalize;
pub use options::{ExtractOptions, ExtractOptionsBuilder, FetchConfig, FetchConfigBuilder};
pub use record::ArticleRecord;
pub use title::{resolve_title, resolve_title_with};
pub use validator::looks_like_author_list;
