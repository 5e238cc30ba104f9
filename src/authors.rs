//! Author list resolution.
//!
//! Authors are looked up through an ordered chain of strategies sharing one
//! signature. Each strategy either produces a candidate, declines with `Ok(None)`,
//! or fails. The first candidate ends the chain and a failure aborts it:
//!
//! 1. the `description` meta tag, cut at the journal name or publication year;
//! 2. a table cell labelled `Авторы:` and the coloured text inside it;
//! 3. any emphasised text long enough to pass the author-list check.
//!
//! Only the meta strategy trusts its cut without consulting
//! [`looks_like_author_list`]; the structural strategies validate every candidate.
//!
//! Failures never leave this module as errors: [`resolve_authors`] turns them into
//! the `"error during author lookup"` sentinel. [`lookup_authors`] keeps the
//! distinction for callers that want it.

use crate::constants::{AUTHORS_LOOKUP_ERROR, AUTHORS_NOT_FOUND, JOURNAL_MARKER, REGEXPS};
use crate::document::{compile_selector, first_text, inner_text, Document};
use crate::error::{ExtractError, Result};
use crate::normalize::normalize;
use crate::options::ExtractOptions;
use crate::validator::looks_like_author_list;
use once_cell::sync::Lazy;
use scraper::Selector;
use tracing::{debug, trace, warn};

static TD_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

/// Outcome of running the author strategy chain.
#[derive(Debug)]
pub enum AuthorLookup {
    /// A strategy produced this author list
    Found(String),
    /// Every strategy declined
    NotFound,
    /// A strategy failed and the chain was abandoned
    Fault(ExtractError),
}

impl AuthorLookup {
    /// Collapse into the caller-visible string, substituting sentinels.
    pub fn into_authors(self) -> String {
        match self {
            AuthorLookup::Found(authors) => authors,
            AuthorLookup::NotFound => AUTHORS_NOT_FOUND.to_string(),
            AuthorLookup::Fault(_) => AUTHORS_LOOKUP_ERROR.to_string(),
        }
    }
}

pub(crate) type AuthorStrategy = fn(&Document, &ExtractOptions) -> Result<Option<String>>;

const AUTHOR_STRATEGIES: [(&str, AuthorStrategy); 3] = [
    ("meta-description", authors_from_meta_description),
    ("labelled-cell", authors_from_labelled_cell),
    ("emphasis", authors_from_emphasis),
];

/// Resolve the author list with default options.
pub fn resolve_authors(doc: &Document) -> String {
    resolve_authors_with(doc, &ExtractOptions::default())
}

/// Resolve the author list, returning a sentinel instead of failing.
pub fn resolve_authors_with(doc: &Document, options: &ExtractOptions) -> String {
    lookup_authors(doc, options).into_authors()
}

/// Run the strategy chain and report how it ended.
pub fn lookup_authors(doc: &Document, options: &ExtractOptions) -> AuthorLookup {
    run_strategies(doc, options, &AUTHOR_STRATEGIES)
}

pub(crate) fn run_strategies(
    doc: &Document,
    options: &ExtractOptions,
    strategies: &[(&str, AuthorStrategy)],
) -> AuthorLookup {
    for (name, strategy) in strategies {
        match strategy(doc, options) {
            Ok(Some(authors)) if !authors.is_empty() => {
                debug!(strategy = *name, chars = authors.chars().count(), "authors resolved");
                return AuthorLookup::Found(authors);
            }
            Ok(_) => trace!(strategy = *name, "no authors"),
            Err(err) => {
                warn!(strategy = *name, error = %err, "author lookup failed");
                return AuthorLookup::Fault(err);
            }
        }
    }
    AuthorLookup::NotFound
}

/// eLIBRARY puts "Authors Journal, year, ..." into the description meta tag.
fn authors_from_meta_description(
    doc: &Document,
    _options: &ExtractOptions,
) -> Result<Option<String>> {
    let Some(content) = doc.meta_content("description") else {
        return Ok(None);
    };
    let description = normalize(&content);
    let Some(line) = description.split('\n').map(str::trim).find(|l| !l.is_empty()) else {
        return Ok(None);
    };

    if let Some(idx) = line.find(JOURNAL_MARKER) {
        if idx > 0 {
            return Ok(Some(normalize(line[..idx].trim())));
        }
    }

    if let Some(year) = REGEXPS.year.find(line) {
        if year.start() > 0 {
            return Ok(Some(normalize(line[..year.start()].trim())));
        }
    }

    Ok(Some(normalize(line)))
}

fn authors_from_labelled_cell(doc: &Document, options: &ExtractOptions) -> Result<Option<String>> {
    let author_selector = compile_selector(&options.labelled_author_selector)?;
    let label = options.author_label.as_str();
    let cells = doc.select_all(&TD_SELECTOR);

    // Only the cell's leading text node is checked for the label.
    for cell in cells
        .iter()
        .filter(|c| first_text(c).is_some_and(|t| t.contains(label)))
    {
        for node in cell.select(&author_selector) {
            let text = normalize(&inner_text(&node));
            if looks_like_author_list(&text) {
                return Ok(Some(text));
            }
            trace!(candidate = %text, "rejected labelled candidate");
        }
    }

    // The label can sit in a nested element rather than directly in the cell.
    for cell in cells.iter().filter(|c| inner_text(c).contains(label)) {
        if let Some(node) = cell.select(&author_selector).next() {
            let text = normalize(&inner_text(&node));
            if looks_like_author_list(&text) {
                return Ok(Some(text));
            }
        }
    }

    Ok(None)
}

fn authors_from_emphasis(doc: &Document, options: &ExtractOptions) -> Result<Option<String>> {
    let selector = compile_selector(&options.emphasis_selector)?;

    for node in doc.select_all(&selector) {
        let text = normalize(&inner_text(&node));
        if text.chars().count() > options.min_emphasis_chars && looks_like_author_list(&text) {
            return Ok(Some(text));
        }
    }
    Ok(None)
}
