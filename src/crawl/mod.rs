// src/crawl/mod.rs
// =============================================================================
// This module runs the crawl pipeline.
//
// Stages:
// - generator: fetches the seed page and emits one Task per link
// - worker: N workers fetch linked pages and extract descriptions
// - pipeline: wires the stages with channels, closes the result stream
//   once every worker is done, and drains results for the caller
//
// Helpers:
// - config: validated crawl settings
// - task: the Task / CrawlResult values passed between stages
// - text: text cleanup and link resolution
// =============================================================================

mod config;
mod generator;
mod pipeline;
mod task;
mod text;
mod worker;

pub use config::{CrawlConfig, ErrorPolicy};
pub use pipeline::{CrawlSummary, Crawler};
pub use task::{CrawlResult, TaskOutcome};
