// src/config.rs
use std::time::Duration;

use crate::fetch::DEFAULT_USER_AGENT;

/// Knobs for one enrichment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichConfig {
    pub page_timeout: Duration,
    pub about_timeout: Duration,
    pub follow_about_page: bool,
    pub user_agent: String,
    /// Minimum gap between two requests to the same host, enforced by
    /// [`crate::fetch::RateLimitedFetcher`].
    pub host_delay: Duration,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            page_timeout: Duration::from_secs(15),
            about_timeout: Duration::from_secs(10),
            follow_about_page: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            host_delay: Duration::from_millis(2000),
        }
    }
}

impl EnrichConfig {
    pub fn with_page_timeout(mut self, timeout: Duration) -> Self {
        self.page_timeout = timeout;
        self
    }

    pub fn with_about_page(mut self, follow: bool) -> Self {
        self.follow_about_page = follow;
        self
    }

    pub fn with_host_delay(mut self, delay: Duration) -> Self {
        self.host_delay = delay;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
