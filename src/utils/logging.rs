// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset. The HTML parser and HTTP stack are noisy
/// below `warn` and say nothing useful about a scrape.
const DEFAULT_DIRECTIVES: &str = "info,html5ever=warn,selectors=warn,hyper=warn,reqwest=warn";

/// Installs the `fmt` subscriber, filtered by `RUST_LOG`.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("Logging initialised");
}
