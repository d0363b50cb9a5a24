// src/pipeline/mod.rs
pub mod batch;
pub mod merge;
pub mod orchestrator;

pub use batch::{BatchRunner, BatchSummary};
pub use merge::merge;
pub use orchestrator::Orchestrator;
