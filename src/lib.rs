// src/lib.rs
//! Enriches directory listings of law firms from their websites and writes
//! marketing copy for each listing.

pub mod config;
pub mod extractors;
pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod storage;
pub mod synth;
pub mod utils;
