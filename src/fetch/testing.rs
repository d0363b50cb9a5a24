// src/fetch/testing.rs
//! Canned [`PageFetcher`] for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::PageFetcher;
use crate::utils::error::FetchError;

/// Serves canned pages and remembers which URLs were requested, and when.
#[derive(Default)]
pub(crate) struct StubFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<(String, Instant)>>,
}

impl StubFetcher {
    pub(crate) fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().iter().map(|(url, _)| url.clone()).collect()
    }

    pub(crate) fn request_times(&self) -> Vec<Instant> {
        self.requests.lock().unwrap().iter().map(|(_, at)| *at).collect()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push((url.to_string(), Instant::now()));
        self.pages
            .get(url)
            .cloned()
            .ok_or(FetchError::Http(reqwest::StatusCode::NOT_FOUND))
    }
}
