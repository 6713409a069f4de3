// src/crawl/generator.rs
// =============================================================================
// The task generator: the first stage of the pipeline.
//
// How it works:
// 1. Fetch the seed page
// 2. Find every element matching the title selector
// 3. Skip elements without an href
// 4. Resolve the href, clean the link text, send a Task
// 5. Return; dropping the Sender closes the task stream
//
// Tasks are sent in document order. The channel only holds one task, so the
// generator waits whenever the workers are busy.
//
// Rust concepts:
// - Drop: The Sender is closed automatically when it goes out of scope,
//   on every return path (including `?` errors)
// - let-else: Early `continue` when a pattern doesn't match
// =============================================================================

use std::sync::Arc;
use tokio::sync::mpsc;

use super::task::Task;
use super::text::{clean_text, resolve_link};
use crate::error::CrawlError;
use crate::fetch::{Fetcher, Query};

// Fetches the seed page and emits one Task per link found on it
//
// Parameters:
//   fetcher: where pages come from
//   seed_url: the page listing the links
//   title: selector for the link elements
//   tasks: sending half of the task stream (taken by value so it is
//          dropped, and the stream closed, when we return)
//
// Returns: the number of tasks emitted, or CrawlError::Seed if the seed page
//          could not be fetched (in that case no task is emitted)
pub async fn generate_tasks(
    fetcher: Arc<dyn Fetcher>,
    seed_url: String,
    title: Query,
    tasks: mpsc::Sender<Task>,
) -> Result<usize, CrawlError> {
    let html = fetcher.fetch(&seed_url).await.map_err(CrawlError::Seed)?;

    let selections = title.select(&html);
    tracing::debug!(
        seed = %seed_url,
        selector = title.as_str(),
        matched = selections.len(),
        "seed page parsed"
    );

    let mut emitted = 0;
    for selection in selections {
        let Some(href) = selection.href else {
            tracing::trace!(text = %selection.text, "element has no href, skipping");
            continue;
        };

        let task = Task {
            url: resolve_link(&seed_url, &href),
            title: clean_text(&selection.text),
        };
        tracing::debug!(url = %task.url, title = %task.title, "task emitted");

        if tasks.send(task).await.is_err() {
            // Every worker is gone, which only happens when the crawl was aborted
            tracing::debug!("task stream has no receivers left, stopping");
            break;
        }
        emitted += 1;
    }

    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::fetch::fake::FakeFetcher;
    use reqwest::StatusCode;

    const SEED: &str = "https://x.test/";

    async fn collect(fetcher: FakeFetcher, selector: &str) -> (Result<usize, CrawlError>, Vec<Task>) {
        let (tx, mut rx) = mpsc::channel(16);
        let count = generate_tasks(
            Arc::new(fetcher),
            SEED.to_string(),
            Query::parse(selector).unwrap(),
            tx,
        )
        .await;

        let mut tasks = Vec::new();
        while let Some(task) = rx.recv().await {
            tasks.push(task);
        }
        (count, tasks)
    }

    #[tokio::test]
    async fn test_emits_tasks_in_document_order() {
        let fetcher = FakeFetcher::new().page(
            SEED,
            r#"<h2><a href="/p1">Title One</a></h2>
               <h2><a href="/p2">Title Two</a></h2>"#,
        );

        let (count, tasks) = collect(fetcher, "h2 a").await;
        assert_eq!(count.unwrap(), 2);
        assert_eq!(
            tasks,
            vec![
                Task {
                    url: "https://x.test/p1".to_string(),
                    title: "Title One".to_string(),
                },
                Task {
                    url: "https://x.test/p2".to_string(),
                    title: "Title Two".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_skips_elements_without_href() {
        let fetcher = FakeFetcher::new().page(
            SEED,
            r#"<a href="/p1">One</a><a>No link</a><a href="https://other.com/x">
                 Other
               </a>"#,
        );

        let (count, tasks) = collect(fetcher, "a").await;
        assert_eq!(count.unwrap(), 2);
        assert_eq!(tasks[0].url, "https://x.test/p1");
        assert_eq!(tasks[1].url, "https://other.com/x");
        assert_eq!(tasks[1].title, "Other");
    }

    #[tokio::test]
    async fn test_no_matches_still_closes_stream() {
        let fetcher = FakeFetcher::new().page(SEED, "<p>nothing to see</p>");

        let (count, tasks) = collect(fetcher, "h2 a").await;
        assert_eq!(count.unwrap(), 0);
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_seed_failure_emits_nothing() {
        let fetcher = FakeFetcher::new().status(SEED, StatusCode::INTERNAL_SERVER_ERROR);

        let (count, tasks) = collect(fetcher, "h2 a").await;
        assert!(matches!(
            count,
            Err(CrawlError::Seed(FetchError::BadStatus { .. }))
        ));
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_stops_when_receiver_dropped() {
        let fetcher = FakeFetcher::new().page(SEED, r#"<a href="/1">1</a><a href="/2">2</a>"#);
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let count = generate_tasks(
            Arc::new(fetcher),
            SEED.to_string(),
            Query::parse("a").unwrap(),
            tx,
        )
        .await;
        assert_eq!(count.unwrap(), 0);
    }
}
