//! Configuration for extraction and fetching.
//!
//! [`ExtractOptions`] tunes the heuristics, [`FetchConfig`] describes how the
//! caller-side fetch layer talks to the site. Both are plain values owned by the
//! caller and passed in explicitly.
//!
//! ## Example
//!
//! ```rust
//! use elibraryrs::{Extractor, ExtractOptions};
//!
//! let options = ExtractOptions::builder()
//!     .max_title_chars(120)
//!     .min_emphasis_chars(15)
//!     .build();
//!
//! let extractor = Extractor::new(Some(options));
//! ```

use crate::constants::{
    AUTHORS_LABEL, DEFAULT_EMPHASIS_SELECTOR, DEFAULT_LABELLED_AUTHOR_SELECTOR,
    DEFAULT_MAX_TITLE_CHARS, DEFAULT_MIN_EMPHASIS_CHARS,
};
use std::time::Duration;

/// Tuning knobs for the title and author resolvers.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Longest `<title>` text kept before it is cut and marked with `...`.
    ///
    /// Counted in characters, not bytes.
    ///
    /// Default: `200`
    pub max_title_chars: usize,

    /// Emphasised text must be strictly longer than this to count as an author list.
    ///
    /// Default: `10`
    pub min_emphasis_chars: usize,

    /// Label text identifying the table cell that holds the authors.
    ///
    /// Default: `"Авторы:"`
    pub author_label: String,

    /// CSS selector for author text inside the labelled cell.
    ///
    /// Default: `"font[color]"`
    pub labelled_author_selector: String,

    /// CSS selector for the last-resort emphasis scan.
    ///
    /// Default: `"font[color='#00008f'], b, strong"`
    pub emphasis_selector: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_title_chars: DEFAULT_MAX_TITLE_CHARS,
            min_emphasis_chars: DEFAULT_MIN_EMPHASIS_CHARS,
            author_label: AUTHORS_LABEL.to_string(),
            labelled_author_selector: DEFAULT_LABELLED_AUTHOR_SELECTOR.to_string(),
            emphasis_selector: DEFAULT_EMPHASIS_SELECTOR.to_string(),
        }
    }
}

impl ExtractOptions {
    /// Creates a new builder for ExtractOptions
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::default()
    }
}

/// Builder for [`ExtractOptions`].
#[derive(Default)]
pub struct ExtractOptionsBuilder {
    max_title_chars: Option<usize>,
    min_emphasis_chars: Option<usize>,
    author_label: Option<String>,
    labelled_author_selector: Option<String>,
    emphasis_selector: Option<String>,
}

impl ExtractOptionsBuilder {
    /// Set the title length limit
    pub fn max_title_chars(mut self, max: usize) -> Self {
        self.max_title_chars = Some(max);
        self
    }

    /// Set the minimum length for emphasised author text
    pub fn min_emphasis_chars(mut self, min: usize) -> Self {
        self.min_emphasis_chars = Some(min);
        self
    }

    /// Set the author cell label
    pub fn author_label(mut self, label: impl Into<String>) -> Self {
        self.author_label = Some(label.into());
        self
    }

    /// Set the selector used inside the labelled cell
    pub fn labelled_author_selector(mut self, css: impl Into<String>) -> Self {
        self.labelled_author_selector = Some(css.into());
        self
    }

    /// Set the selector for the emphasis scan
    pub fn emphasis_selector(mut self, css: impl Into<String>) -> Self {
        self.emphasis_selector = Some(css.into());
        self
    }

    /// Build the ExtractOptions
    pub fn build(self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        ExtractOptions {
            max_title_chars: self.max_title_chars.unwrap_or(defaults.max_title_chars),
            min_emphasis_chars: self
                .min_emphasis_chars
                .unwrap_or(defaults.min_emphasis_chars),
            author_label: self.author_label.unwrap_or(defaults.author_label),
            labelled_author_selector: self
                .labelled_author_selector
                .unwrap_or(defaults.labelled_author_selector),
            emphasis_selector: self.emphasis_selector.unwrap_or(defaults.emphasis_selector),
        }
    }
}

/// Request profile and offline rules for the fetch layer.
///
/// The defaults mimic a desktop Chrome with a Russian locale, which is what
/// eLIBRARY serves full article pages to.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// `User-Agent` header.
    pub user_agent: String,

    /// `Accept` header.
    pub accept: String,

    /// `Accept-Language` header.
    pub accept_language: String,

    /// Whole-request timeout.
    ///
    /// Default: 60 seconds
    pub timeout: Duration,

    /// Keep cookies between requests made by the same fetcher.
    ///
    /// Default: `true`
    pub cookies: bool,

    /// URLs must contain one of these to be fetched live.
    ///
    /// Default: `["elibrary.ru"]`
    pub live_hosts: Vec<String>,

    /// URLs containing any of these are served canned data.
    ///
    /// Default: `["test", "example"]`
    pub offline_markers: Vec<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8".to_string(),
            accept_language: "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7".to_string(),
            timeout: Duration::from_secs(60),
            cookies: true,
            live_hosts: vec!["elibrary.ru".to_string()],
            offline_markers: vec!["test".to_string(), "example".to_string()],
        }
    }
}

impl FetchConfig {
    /// Creates a new builder for FetchConfig
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }

    /// Whether `url` should be answered from fallback data instead of the network.
    ///
    /// True when the URL carries an offline marker or names none of the live hosts.
    pub fn should_use_fallback(&self, url: &str) -> bool {
        self.offline_markers.iter().any(|m| url.contains(m.as_str()))
            || !self.live_hosts.iter().any(|h| url.contains(h.as_str()))
    }
}

/// Builder for [`FetchConfig`].
#[derive(Default)]
pub struct FetchConfigBuilder {
    user_agent: Option<String>,
    accept: Option<String>,
    accept_language: Option<String>,
    timeout: Option<Duration>,
    cookies: Option<bool>,
    live_hosts: Option<Vec<String>>,
    offline_markers: Option<Vec<String>>,
}

impl FetchConfigBuilder {
    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the Accept header
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Set the Accept-Language header
    pub fn accept_language(mut self, accept_language: impl Into<String>) -> Self {
        self.accept_language = Some(accept_language.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable or disable the cookie store
    pub fn cookies(mut self, cookies: bool) -> Self {
        self.cookies = Some(cookies);
        self
    }

    /// Set the hosts that are fetched live
    pub fn live_hosts(mut self, hosts: Vec<String>) -> Self {
        self.live_hosts = Some(hosts);
        self
    }

    /// Set the markers that force fallback data
    pub fn offline_markers(mut self, markers: Vec<String>) -> Self {
        self.offline_markers = Some(markers);
        self
    }

    /// Build the FetchConfig
    pub fn build(self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig {
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            accept: self.accept.unwrap_or(defaults.accept),
            accept_language: self.accept_language.unwrap_or(defaults.accept_language),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            cookies: self.cookies.unwrap_or(defaults.cookies),
            live_hosts: self.live_hosts.unwrap_or(defaults.live_hosts),
            offline_markers: self.offline_markers.unwrap_or(defaults.offline_markers),
        }
    }
}
