// src/fetch/rate_limited.rs
use std::time::Duration;

use async_trait::async_trait;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

use super::PageFetcher;
use crate::utils::error::FetchError;

/// Wraps a fetcher so that two requests to the same host are at least
/// `host_delay` apart. Different hosts never wait on each other.
pub struct RateLimitedFetcher<F> {
    inner: F,
    limiter: Option<DefaultKeyedRateLimiter<String>>,
}

impl<F: PageFetcher> RateLimitedFetcher<F> {
    /// A zero delay disables limiting.
    pub fn new(inner: F, host_delay: Duration) -> Self {
        let limiter: Option<DefaultKeyedRateLimiter<String>> =
            Quota::with_period(host_delay).map(|quota| RateLimiter::keyed(quota));
        Self { inner, limiter }
    }

    #[cfg(test)]
    pub(crate) fn inner(&self) -> &F {
        &self.inner
    }
}

#[async_trait]
impl<F: PageFetcher> PageFetcher for RateLimitedFetcher<F> {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        if let (Some(limiter), Some(host)) = (&self.limiter, host_of(url)) {
            limiter.until_key_ready(&host).await;
            // Hosts whose delay has fully elapsed carry no state worth keeping.
            limiter.retain_recent();
        }
        self.inner.fetch(url, timeout).await
    }
}

/// Lower-cased host of an absolute URL.
pub fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url.trim())
        .ok()?
        .host_str()
        .map(str::to_lowercase)
}
