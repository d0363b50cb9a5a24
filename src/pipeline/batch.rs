// src/pipeline/batch.rs
use serde::Serialize;

use crate::fetch::{host_of, PageFetcher};
use crate::models::BusinessRecord;
use crate::pipeline::orchestrator::Orchestrator;

/// Outcome counts for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub enriched: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Enriches records one after another. Per-host pacing belongs to the
/// fetcher; see [`crate::fetch::RateLimitedFetcher`].
pub struct BatchRunner<F> {
    orchestrator: Orchestrator<F>,
}

impl<F: PageFetcher> BatchRunner<F> {
    pub fn new(orchestrator: Orchestrator<F>) -> Self {
        Self { orchestrator }
    }

    pub async fn run(&self, records: Vec<BusinessRecord>) -> (Vec<BusinessRecord>, BatchSummary) {
        let mut summary = BatchSummary {
            total: records.len(),
            ..BatchSummary::default()
        };
        let mut enriched = Vec::with_capacity(records.len());

        for (i, record) in records.into_iter().enumerate() {
            tracing::info!("Processing {}/{}: {}", i + 1, summary.total, record.firm_name);

            if record.website.as_deref().and_then(host_of).is_none() {
                tracing::warn!("No usable website for {}, skipping scrape", record.firm_name);
                summary.skipped += 1;
                enriched.push(record);
                continue;
            }

            let (record, result) = self.orchestrator.enrich(record).await;
            match result.failure_cause() {
                None => summary.enriched += 1,
                Some(cause) => {
                    tracing::warn!("Enrichment failed for {} ({}): {}", record.firm_name, result.website, cause);
                    summary.failed += 1;
                }
            }
            enriched.push(record);
        }

        tracing::info!(
            "Batch finished. Enriched: {}, Failed: {}, Skipped: {}",
            summary.enriched,
            summary.failed,
            summary.skipped
        );
        (enriched, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::config::EnrichConfig;
    use crate::fetch::testing::StubFetcher;
    use crate::fetch::RateLimitedFetcher;

    fn firm(name: &str, website: Option<&str>) -> BusinessRecord {
        let mut record = BusinessRecord::new(name);
        record.website = website.map(str::to_string);
        record
    }

    #[test]
    fn batch_counts_outcomes_and_preserves_order() {
        let fetcher = StubFetcher::default()
            .with_page("https://a.com.au/", "<p>No win no fee.</p>");
        let runner = BatchRunner::new(Orchestrator::new(fetcher, EnrichConfig::default()));

        let records = vec![
            firm("A", Some("https://a.com.au/")),
            firm("B", None),
            firm("C", Some("https://c.com.au/")),
        ];
        let (out, summary) = tokio_test::block_on(runner.run(records));

        assert_eq!(
            summary,
            BatchSummary { total: 3, enriched: 1, failed: 1, skipped: 1 }
        );
        let names: Vec<_> = out.iter().map(|r| r.firm_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(out[0].features.no_win_no_fee, Some(true));
        assert_eq!(out[2], firm("C", Some("https://c.com.au/")));
    }

    #[test]
    fn same_host_requests_are_spaced() {
        let fetcher = StubFetcher::default()
            .with_page("https://a.com.au/one", "<p>x</p>")
            .with_page("https://a.com.au/two", "<p>y</p>");
        let fetcher = RateLimitedFetcher::new(fetcher, Duration::from_millis(60));
        let config = EnrichConfig::default().with_about_page(false);
        let runner = BatchRunner::new(Orchestrator::new(fetcher, config));

        let started = std::time::Instant::now();
        let records = vec![
            firm("One", Some("https://a.com.au/one")),
            firm("Two", Some("https://a.com.au/two")),
        ];
        let (_, summary) = tokio_test::block_on(runner.run(records));

        assert_eq!(summary.enriched, 2);
        assert!(started.elapsed() >= Duration::from_millis(60));
    }
}
