// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - A `Fetcher` trait: "give me the HTML body of this URL"
// - `HttpFetcher`: the real implementation using reqwest
// - Anything other than 200 OK is an error (429 gets its own variant)
//
// Rust concepts:
// - Traits: Shared behavior that different types can implement
// - async-trait: Lets a trait have async methods and still be used as dyn
// - Result<T, E>: For error handling
// =============================================================================

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::FetchError;

// Name the user agent after the app, e.g. "link-harvester/0.1.0"
pub static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Something that can turn a URL into an HTML body
//
// Send + Sync because one fetcher is shared by every worker task.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Fetches pages with a reqwest Client
//
// The client is created once and reused for every request
// (reqwest keeps a connection pool inside it).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates a fetcher
    //
    // Parameters:
    //   timeout: optional per-request timeout (None = wait forever)
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    // Issues a GET request and returns the body as text
    //
    // The response is consumed by .text(), so the connection is released
    // whether we succeed or fail.
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::trace!(url, %status, "response received");

        if status != StatusCode::OK {
            return Err(FetchError::from_status(url, status));
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The crawl pipeline only needs "URL in, HTML out"
//    - Tests can plug in a fake fetcher that never touches the network
//    - Arc<dyn Fetcher> lets every worker share the same fetcher
//
// 2. What does #[async_trait] do?
//    - Trait objects (dyn Trait) can't have plain async fns yet
//    - The macro rewrites them to return a boxed future
//
// 3. Why map_err?
//    - reqwest gives us reqwest::Error
//    - We wrap it in our own FetchError together with the URL
//    - That way the final error message says which page failed
// -----------------------------------------------------------------------------
