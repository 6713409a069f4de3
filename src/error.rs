// src/error.rs
// =============================================================================
// Error types used across the crawler.
//
// We use `thiserror` to derive std::error::Error and Display for our enums.
// Each error carries the URL it happened on, so a single line is enough to
// tell the user what failed and why.
//
// Error taxonomy:
// - FetchError: something went wrong getting a page (network, status, body)
// - ConfigError: the command-line input can't be used to start a crawl
// - CrawlError: a FetchError placed in the pipeline (seed page or linked page)
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

use crate::crawl::ErrorPolicy;

/// Errors from the HTTP collaborator
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("could not get request {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP 429 gets its own message but is handled like any bad status
    #[error("{url}: too many requests")]
    RateLimited { url: String },

    /// Any other non-200 response
    #[error("{url}: bad response from server: {status}")]
    BadStatus { url: String, status: StatusCode },

    /// The response arrived but the body could not be read
    #[error("could not read response body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Maps a non-200 status to the matching error variant
    pub fn from_status(url: &str, status: StatusCode) -> Self {
        if status == StatusCode::TOO_MANY_REQUESTS {
            FetchError::RateLimited {
                url: url.to_string(),
            }
        } else {
            FetchError::BadStatus {
                url: url.to_string(),
                status,
            }
        }
    }
}

/// Errors found while validating the crawl configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid seed URL '{url}': {source}")]
    InvalidSeedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Errors that travel through the crawl pipeline
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The seed page could not be fetched; nothing can be crawled
    #[error("seed page: {0}")]
    Seed(#[source] FetchError),

    /// One linked page could not be fetched
    #[error("task '{title}': {source}")]
    Page {
        url: String,
        title: String,
        #[source]
        source: FetchError,
    },

    /// A pipeline task panicked
    #[error("pipeline unit stopped unexpectedly: {0}")]
    Unit(String),
}

impl CrawlError {
    /// Whether this error ends the whole crawl under the given policy
    ///
    /// Seed and unit failures always do; a single page failure only does
    /// when the policy is Abort.
    pub fn is_fatal(&self, policy: ErrorPolicy) -> bool {
        match self {
            CrawlError::Seed(_) | CrawlError::Unit(_) => true,
            CrawlError::Page { .. } => policy == ErrorPolicy::Abort,
        }
    }
}
