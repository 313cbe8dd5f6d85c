//! Page fetching over HTTP.
//!
//! The pipeline only ever needs one thing from the network: the body of a
//! page as text. That capability is described by the [`FetchPage`] trait so the
//! driver can be exercised against in-memory pages in tests, while
//! [`HttpFetcher`] does the real work with `reqwest`.
//!
//! Requests are plain GETs, issued one at a time. There is no retry: a failed
//! request surfaces as [`ScrapeError::Fetch`] and the caller decides whether to
//! skip the page or abort.

use crate::error::ScrapeError;
use reqwest::Client;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Trait for fetching a page body.
///
/// Implementors return the raw HTML of the page at `url`.
pub trait FetchPage {
    /// Fetch `url` and return its body as text.
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError>;
}

/// [`FetchPage`] implementation backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher that identifies itself with `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl FetchPage for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Non-success HTTP status");
            return Err(ScrapeError::fetch(url, format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::fetch(url, e))?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        Ok(body)
    }
}

/// In-memory pages for tests. Unknown URLs fail like a 404 and every
/// requested URL is recorded.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StaticPages {
    pages: std::collections::HashMap<String, String>,
    requested: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl StaticPages {
    pub(crate) fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

#[cfg(test)]
impl FetchPage for StaticPages {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::fetch(url, "HTTP 404 Not Found"))
    }
}
