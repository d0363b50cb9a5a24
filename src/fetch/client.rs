// src/fetch/client.rs
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, redirect};

use crate::utils::error::FetchError;

/// Identifies the enricher to site operators.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; FirmEnricher/0.1; directory profile enrichment)";
const MAX_REDIRECTS: usize = 10;

/// Anything that can turn a URL into an HTML body.
///
/// The orchestrator only talks to this trait, so tests swap in a canned
/// fetcher and never touch the network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// `reqwest`-backed fetcher. Follows redirects and sends an identifying User-Agent.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(user_agent)?,
        })
    }
}

/// Creates a reqwest client configured for firm websites.
fn build_client(user_agent: &str) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .redirect(redirect::Policy::limited(MAX_REDIRECTS))
        .build()
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(url.to_string()));
        }

        tracing::info!("Fetching page: {}", url);

        let response = self
            .client
            .get(parsed)
            .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
            .timeout(timeout)
            .send()
            .await?; // Propagates reqwest::Error as FetchError::Network

        // Check if the request was successful (status code 2xx)
        let status = response.status();
        if !status.is_success() {
            tracing::warn!("HTTP error status: {} for URL: {}", status, url);
            return Err(FetchError::Http(status));
        }

        let body = response.text().await?;
        tracing::debug!("Downloaded {} bytes from {}", body.len(), url);

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_http_urls_without_network() {
        let fetcher = HttpFetcher::new(DEFAULT_USER_AGENT).unwrap();
        let err = tokio_test::block_on(fetcher.fetch("ftp://firm.com.au/", Duration::from_secs(1)))
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));

        let err = tokio_test::block_on(fetcher.fetch("not a url", Duration::from_secs(1))).unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
