// src/fetch/mod.rs
pub mod client;
pub mod rate_limited;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{HttpFetcher, PageFetcher, DEFAULT_USER_AGENT};
pub use rate_limited::{host_of, RateLimitedFetcher};
