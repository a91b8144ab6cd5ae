//! Chrome Web Store title lookup.
//!
//! The resolver only needs "what is this extension called on the store";
//! [`StoreLookup`] keeps the scraping strategy behind that one question.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;

use crate::error::{Error, Result};

/// Detail page prefix; the extension identifier is appended verbatim.
pub const DEFAULT_STORE_URL: &str = "https://chrome.google.com/webstore/detail/";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Captures the content of the page's `og:title` meta tag
static OG_TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"og:title" content="([\s\S]*?)">"#).unwrap());

/// Reasons a store lookup produced no title.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store lookups are disabled")]
    Disabled,

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("store returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("store page for {identifier} has no og:title")]
    TitleNotFound { identifier: String },
}

/// Resolve an extension identifier to its store display name.
pub trait StoreLookup {
    fn lookup_title(&self, identifier: &str) -> std::result::Result<String, StoreError>;
}

/// Pull the first non-empty `og:title` value out of a store page.
pub fn extract_og_title(html: &str) -> Option<String> {
    OG_TITLE_PATTERN
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Blocking HTTP client for the public web store.
#[derive(Debug, Clone)]
pub struct WebStore {
    client: Client,
    base_url: String,
}

impl WebStore {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::StoreClient(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn detail_url(&self, identifier: &str) -> String {
        format!("{}{}", self.base_url, identifier)
    }
}

impl StoreLookup for WebStore {
    fn lookup_title(&self, identifier: &str) -> std::result::Result<String, StoreError> {
        let url = self.detail_url(identifier);
        tracing::debug!("Looking up {} in the web store", identifier);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|source| StoreError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .map_err(|source| StoreError::Request { url, source })?;

        extract_og_title(&body).ok_or_else(|| StoreError::TitleNotFound {
            identifier: identifier.to_string(),
        })
    }
}

/// Lookup used when the store must not be contacted.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineStore;

impl StoreLookup for OfflineStore {
    fn lookup_title(&self, _identifier: &str) -> std::result::Result<String, StoreError> {
        Err(StoreError::Disabled)
    }
}
