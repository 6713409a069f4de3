// src/fetch/fake.rs
// =============================================================================
// An in-memory Fetcher for tests.
//
// Pages are registered up front; fetching an unknown URL returns 404.
// Failures answer at once; successful pages can sleep before answering.
// It remembers the highest number of fetches running at the same time.
// =============================================================================

use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::Fetcher;
use crate::error::FetchError;

#[derive(Debug, Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, StatusCode>>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(html.to_string()));
        self
    }

    pub fn status(mut self, url: &str, status: StatusCode) -> Self {
        self.pages.insert(url.to_string(), Err(status));
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);

        let page = match self.pages.get(url) {
            Some(Ok(html)) => html.clone(),
            Some(Err(status)) => {
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                return Err(FetchError::from_status(url, *status));
            }
            None => {
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                return Err(FetchError::from_status(url, StatusCode::NOT_FOUND));
            }
        };

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(page)
    }
}
