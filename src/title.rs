//! Title resolution.
//!
//! Tries `<title>` first, then the first `<h1>`, and settles for a sentinel. A
//! missing node or an element that normalizes to nothing just hands over to the
//! next strategy; nothing here can fail.

use crate::constants::{TITLE_NOT_FOUND, TRUNCATION_MARKER};
use crate::document::{inner_text, Document};
use crate::normalize::normalize;
use crate::options::ExtractOptions;
use crate::utils::truncate_chars;
use once_cell::sync::Lazy;
use scraper::Selector;
use tracing::debug;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());

type TitleStrategy = fn(&Document, &ExtractOptions) -> Option<String>;

const TITLE_STRATEGIES: [(&str, TitleStrategy); 2] = [
    ("title-tag", title_from_title_tag),
    ("first-h1", title_from_first_h1),
];

/// Resolve the article title with default options.
pub fn resolve_title(doc: &Document) -> String {
    resolve_title_with(doc, &ExtractOptions::default())
}

/// Resolve the article title.
pub fn resolve_title_with(doc: &Document, options: &ExtractOptions) -> String {
    for (name, strategy) in TITLE_STRATEGIES {
        if let Some(title) = strategy(doc, options) {
            debug!(strategy = name, chars = title.chars().count(), "title resolved");
            return title;
        }
    }
    TITLE_NOT_FOUND.to_string()
}

fn title_from_title_tag(doc: &Document, options: &ExtractOptions) -> Option<String> {
    let node = doc.select_first(&TITLE_SELECTOR)?;
    let title = normalize(&inner_text(&node));
    if title.is_empty() {
        return None;
    }

    if title.chars().count() > options.max_title_chars {
        let cut = truncate_chars(&title, options.max_title_chars);
        return Some(format!("{}{}", cut, TRUNCATION_MARKER));
    }
    Some(title)
}

fn title_from_first_h1(doc: &Document, _options: &ExtractOptions) -> Option<String> {
    let node = doc.select_first(&H1_SELECTOR)?;
    Some(normalize(&inner_text(&node))).filter(|t| !t.is_empty())
}
