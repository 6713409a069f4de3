// src/crawl/config.rs
// =============================================================================
// Validated settings for one crawl.
//
// Everything that can be checked without touching the network is checked
// here: the seed URL, both selectors and the worker count.
// =============================================================================

use clap::ValueEnum;
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;
use crate::fetch::Query;

/// What to do when a linked page can't be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorPolicy {
    /// Stop the whole crawl on the first failed page
    #[default]
    Abort,
    /// Report the failed page and keep going
    Isolate,
}

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    pub seed_url: String,
    pub title: Query,
    pub description: Query,
    pub concurrency: usize,
    pub on_error: ErrorPolicy,
    pub timeout: Option<Duration>,
}

impl CrawlConfig {
    // Builds a config, rejecting anything we can't crawl with
    //
    // Parameters:
    //   seed_url: absolute URL of the page that lists the links
    //   title: selector for the link elements on the seed page
    //   description: selector applied to each linked page
    //   concurrency: number of workers (at least 1)
    pub fn new(
        seed_url: &str,
        title: &str,
        description: &str,
        concurrency: usize,
    ) -> Result<Self, ConfigError> {
        Url::parse(seed_url).map_err(|source| ConfigError::InvalidSeedUrl {
            url: seed_url.to_string(),
            source,
        })?;

        if concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        Ok(Self {
            seed_url: seed_url.to_string(),
            title: Query::parse(title)?,
            description: Query::parse(description)?,
            concurrency,
            on_error: ErrorPolicy::default(),
            timeout: None,
        })
    }

    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}
