// src/fetch/mod.rs
// =============================================================================
// This module talks to the outside world: downloading pages and querying
// their HTML.
//
// Submodules:
// - http: The Fetcher trait and its reqwest implementation
// - html: CSS selector queries on top of the `scraper` crate
// - fake: An in-memory Fetcher for tests (compiled only for `cargo test`)
//
// The crawl pipeline only ever sees `Arc<dyn Fetcher>` and `Query`, so it
// doesn't care where pages come from.
// =============================================================================

mod html;
mod http;

#[cfg(test)]
pub mod fake;

pub use html::Query;
pub use http::{Fetcher, HttpFetcher};
