//! Error types for the extraction library.

use thiserror::Error;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting or fetching an article.
///
/// Extraction itself never surfaces these to callers of [`crate::Extractor`]; they
/// are folded into sentinel strings on the [`crate::ArticleRecord`]. Only the fetch
/// layer returns them directly.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A configured CSS selector could not be compiled
    #[error("Invalid selector {0}")]
    InvalidSelector(String),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Transport-level failure from the HTTP client
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// General error
    #[error("Extraction error: {0}")]
    Other(String),
}
