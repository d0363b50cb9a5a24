// src/main.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use firm_enricher::config::EnrichConfig;
use firm_enricher::fetch::{HttpFetcher, RateLimitedFetcher};
use firm_enricher::pipeline::{BatchRunner, Orchestrator};
use firm_enricher::storage::StorageManager;
use firm_enricher::synth;
use firm_enricher::utils::{self, AppError};

/// Command Line Interface for the firm listing enricher
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding an array of business records
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for stage snapshots and run metadata
    #[arg(short, long, default_value = "./output")]
    output_dir: String,

    /// Minimum delay between requests to the same host, in milliseconds
    #[arg(long, default_value_t = 2000)]
    delay_ms: u64,

    /// Timeout for each firm's home page, in seconds
    #[arg(long, default_value_t = 15)]
    timeout_secs: u64,

    /// User-Agent header sent to firm websites
    #[arg(long)]
    user_agent: Option<String>,

    /// Do not follow "about us" links
    #[arg(long)]
    no_about_page: bool,

    /// Skip website scraping and only generate copy
    #[arg(long)]
    skip_scrape: bool,

    /// Skip description generation
    #[arg(long)]
    skip_descriptions: bool,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting enrichment run for args: {:?}", args);

    if args.skip_scrape && args.skip_descriptions {
        return Err(AppError::Config(
            "Nothing to do: both scraping and description generation are skipped".to_string(),
        ));
    }

    // 3. Initialize storage and load input
    let storage = StorageManager::new(&args.output_dir)?;
    let mut records = StorageManager::load_records(&args.input)?;
    let total_records = records.len();
    if records.is_empty() {
        return Err(AppError::Config(format!("No records found in {}", args.input.display())));
    }

    let mut outputs = Vec::new();
    let mut summary = None;

    // 4. Scrape and merge
    if args.skip_scrape {
        tracing::info!("Skipping website scraping");
    } else {
        let mut config = EnrichConfig::default()
            .with_page_timeout(Duration::from_secs(args.timeout_secs))
            .with_host_delay(Duration::from_millis(args.delay_ms))
            .with_about_page(!args.no_about_page);
        if let Some(user_agent) = args.user_agent.clone() {
            config = config.with_user_agent(user_agent);
        }
        let fetcher = RateLimitedFetcher::new(HttpFetcher::new(&config.user_agent)?, config.host_delay);
        let runner = BatchRunner::new(Orchestrator::new(fetcher, config));

        let (enriched, batch) = runner.run(records).await;
        records = enriched;
        outputs.push(storage.save_records(&records, "01_enriched")?);
        summary = Some(batch);
    }

    // 5. Generate copy
    if args.skip_descriptions {
        tracing::info!("Skipping description generation");
    } else {
        records = records.into_iter().map(synth::apply_copy).collect();
        tracing::info!("Generated copy for {} records", records.len());
        outputs.push(storage.save_records(&records, "02_final")?);
    }

    // 6. Record the run
    storage.save_run_metadata(summary.as_ref(), total_records, &outputs)?;

    match summary {
        Some(s) => {
            tracing::info!(
                "Processing finished. Enriched: {}, Failed: {}, Skipped: {}",
                s.enriched,
                s.failed,
                s.skipped
            );
            if s.enriched == 0 && s.failed > 0 {
                return Err(AppError::Processing(format!(
                    "Failed to enrich any of {} firm websites",
                    s.failed
                )));
            }
        }
        None => tracing::info!("Processing finished for {} records", total_records),
    }

    Ok(())
}
