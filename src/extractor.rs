//! The [`Extractor`] facade tying the resolvers together.
//!
//! ## Example
//!
//! ```rust
//! use elibraryrs::{Document, Extractor, ExtractOptions};
//!
//! let html = r#"
//!     <html>
//!     <head>
//!         <title>Моделирование доменной печи</title>
//!         <meta name="description" content="Большаков В.И., Коваленко А.А. Известия вузов. Черная металлургия, 2021">
//!     </head>
//!     <body></body>
//!     </html>
//! "#;
//!
//! let extractor = Extractor::new(Some(ExtractOptions::default()));
//! let record = extractor.extract(&Document::parse(html), "https://elibrary.ru/item.asp?id=1");
//!
//! assert_eq!(record.title(), "Моделирование доменной печи");
//! assert_eq!(record.authors(), "Большаков В.И., Коваленко А.А.");
//! ```

use crate::authors::resolve_authors_with;
use crate::document::Document;
use crate::options::ExtractOptions;
use crate::record::ArticleRecord;
use crate::title::resolve_title_with;

/// Builds an [`ArticleRecord`] from a parsed page.
///
/// Extraction never fails: anything that cannot be determined is reported through
/// the sentinel strings on the record. The extractor holds no state besides its
/// options, so one instance can serve any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Create an extractor, using default options when `None`.
    pub fn new(options: Option<ExtractOptions>) -> Self {
        Self {
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Resolve title and authors of `doc`.
    pub fn extract(&self, doc: &Document, source_reference: &str) -> ArticleRecord {
        let title = resolve_title_with(doc, &self.options);
        let authors = resolve_authors_with(doc, &self.options);
        ArticleRecord::new(title, authors, source_reference)
    }

    /// Parse `html` and extract from it.
    pub fn extract_html(&self, html: &str, source_reference: &str) -> ArticleRecord {
        self.extract(&Document::parse(html), source_reference)
    }
}

/// Extract with default options.
pub fn extract(doc: &Document, source_reference: &str) -> ArticleRecord {
    Extractor::default().extract(doc, source_reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AUTHORS_LOOKUP_ERROR, AUTHORS_NOT_FOUND, TITLE_NOT_FOUND};

    #[test]
    fn empty_document_yields_sentinels() {
        let record = extract(&Document::parse(""), "ref");

        assert_eq!(record.title(), TITLE_NOT_FOUND);
        assert_eq!(record.authors(), AUTHORS_NOT_FOUND);
        assert_eq!(record.source_reference(), "ref");
    }

    #[test]
    fn source_reference_is_passed_through() {
        let reference = "  не URL вовсе ";
        let record = Extractor::new(None).extract_html("<title>T</title>", reference);
        assert_eq!(record.source_reference(), reference);
    }

    #[test]
    fn fault_in_authors_keeps_title() {
        let options = ExtractOptions::builder()
            .labelled_author_selector("font[")
            .build();
        let html = "<html><head><title>Заголовок</title></head><body><table><tr><td>x</td></tr></table></body></html>";
        let record = Extractor::new(Some(options)).extract_html(html, "ref");

        assert_eq!(record.title(), "Заголовок");
        assert_eq!(record.authors(), AUTHORS_LOOKUP_ERROR);
    }
}
