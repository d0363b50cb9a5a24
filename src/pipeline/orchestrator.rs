// src/pipeline/orchestrator.rs
use chrono::Datelike;

use crate::config::EnrichConfig;
use crate::extractors::description::{about_page_text, find_about_link};
use crate::extractors::{extract_profile, Document};
use crate::fetch::PageFetcher;
use crate::models::{BusinessRecord, ExtractionResult};
use crate::pipeline::merge::merge;
use crate::utils::error::FetchError;

/// Fetches one firm's site, runs every field extractor over it and hands the
/// result to the merge step. The only component that touches the network.
pub struct Orchestrator<F> {
    fetcher: F,
    config: EnrichConfig,
    current_year: i32,
}

impl<F: PageFetcher> Orchestrator<F> {
    pub fn new(fetcher: F, config: EnrichConfig) -> Self {
        Self {
            fetcher,
            config,
            current_year: chrono::Utc::now().year(),
        }
    }

    /// Pins the year used to turn "established YYYY" into years of operation.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// One fetch-and-extract pass. Never fails; fetch problems come back as
    /// a failed [`ExtractionResult`].
    pub async fn extract(&self, record: &BusinessRecord) -> ExtractionResult {
        let Some(website) = record.website.as_deref().map(str::trim).filter(|w| !w.is_empty()) else {
            return ExtractionResult::failed("", FetchError::MissingWebsite);
        };

        let html = match self.fetcher.fetch(website, self.config.page_timeout).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to fetch {} for {}: {}", website, record.firm_name, e);
                return ExtractionResult::failed(website, e);
            }
        };

        let doc = Document::parse(&html, Some(website));
        let about_text = self.fetch_about_text(&doc).await;
        let profile = extract_profile(&doc, about_text.as_deref(), self.current_year);

        tracing::info!("Extracted profile for {} from {}", record.firm_name, website);
        ExtractionResult::success(website, profile)
    }

    /// Extracts and merges. The record comes back unchanged when the fetch fails.
    pub async fn enrich(&self, record: BusinessRecord) -> (BusinessRecord, ExtractionResult) {
        let result = self.extract(&record).await;
        let merged = merge(record, &result);
        (merged, result)
    }

    async fn fetch_about_text(&self, doc: &Document) -> Option<String> {
        if !self.config.follow_about_page {
            return None;
        }
        let about_url = find_about_link(doc)?;
        if doc.base_url().is_some_and(|base| base.as_str() == about_url) {
            return None;
        }

        tracing::debug!("Following about page: {}", about_url);
        match self.fetcher.fetch(&about_url, self.config.about_timeout).await {
            Ok(html) => Some(about_page_text(&html)).filter(|text| !text.is_empty()),
            Err(e) => {
                tracing::debug!("Could not fetch about page {}: {}", about_url, e);
                None
            }
        }
    }
}
