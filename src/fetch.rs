//! Caller-side fetching of article pages.
//!
//! [`ArticleFetcher`] downloads a page with the browser-like profile from
//! [`FetchConfig`] and runs the [`Extractor`] over it. When the URL is one that
//! should not be fetched, or the request fails, it answers with
//! [`fallback_record`] instead, so [`ArticleFetcher::fetch_article`] always
//! produces a record.
//!
//! ```rust,no_run
//! use elibraryrs::{ArticleFetcher, FetchConfig};
//!
//! # async fn run() -> elibraryrs::Result<()> {
//! let fetcher = ArticleFetcher::new(FetchConfig::default(), None)?;
//! let record = fetcher.fetch_article("https://elibrary.ru/item.asp?id=67219606").await;
//! println!("{} / {}", record.title(), record.authors());
//! # Ok(())
//! # }
//! ```

use crate::error::{ExtractError, Result};
use crate::extractor::Extractor;
use crate::fallback::fallback_record;
use crate::options::{ExtractOptions, FetchConfig};
use crate::record::ArticleRecord;
use crate::utils;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use tracing::{debug, info, warn};

/// HTTP client plus extractor, configured once and reused.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    client: Client,
    config: FetchConfig,
    extractor: Extractor,
}

impl ArticleFetcher {
    /// Build the HTTP client from `config`.
    ///
    /// Fails if a header value is not valid ASCII or the client cannot be built.
    pub fn new(config: FetchConfig, options: Option<ExtractOptions>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, header_value(&config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, header_value(&config.accept_language)?);

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .cookie_store(config.cookies)
            .build()?;

        Ok(Self {
            client,
            config,
            extractor: Extractor::new(options),
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Download the raw HTML of `url`.
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        if !utils::is_url(url) {
            return Err(ExtractError::InvalidUrl(url.to_string()));
        }

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!(url, bytes = body.len(), "page fetched");
        Ok(body)
    }

    /// Fetch `url` and extract its record, falling back to canned data.
    pub async fn fetch_article(&self, url: &str) -> ArticleRecord {
        if self.config.should_use_fallback(url) {
            info!(url, "serving fallback record for offline reference");
            return fallback_record(url);
        }

        match self.fetch_html(url).await {
            Ok(html) => self.extractor.extract_html(&html, url),
            Err(err) => {
                warn!(url, error = %err, "fetch failed, serving fallback record");
                fallback_record(url)
            }
        }
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| ExtractError::Other(format!("invalid header value {:?}: {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_profile() {
        let fetcher = ArticleFetcher::new(FetchConfig::default(), None).unwrap();
        assert_eq!(fetcher.config().timeout.as_secs(), 60);
    }

    #[test]
    fn rejects_non_ascii_header() {
        let config = FetchConfig::builder().accept_language("русский\n").build();
        assert!(matches!(
            ArticleFetcher::new(config, None),
            Err(ExtractError::Other(_))
        ));
    }
}
