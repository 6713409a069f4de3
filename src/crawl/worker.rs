// src/crawl/worker.rs
// =============================================================================
// The worker pool: the middle stage of the pipeline.
//
// Each worker loops:
// 1. Take the next Task from the shared task stream
// 2. Fetch the task's URL
// 3. Run the description selector on that page and clean the text
// 4. Send the result to the result stream
//
// A worker stops when the task stream is closed and empty. Since every
// worker does one fetch at a time, N workers means at most N pages are
// being fetched at once.
//
// Workers share one Receiver behind a tokio Mutex: whoever gets the lock
// first gets the next task, so results come out in whatever order the
// fetches finish.
// =============================================================================

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

use super::config::ErrorPolicy;
use super::task::{Task, TaskOutcome};
use super::text::clean_text;
use crate::error::{CrawlError, FetchError};
use crate::fetch::{Fetcher, Query};

// The receiving half of the task stream, shared by all workers
pub type SharedTasks = Arc<Mutex<mpsc::Receiver<Task>>>;

pub struct Worker {
    id: usize,
    fetcher: Arc<dyn Fetcher>,
    description: Query,
    on_error: ErrorPolicy,
}

impl Worker {
    pub fn new(
        id: usize,
        fetcher: Arc<dyn Fetcher>,
        description: Query,
        on_error: ErrorPolicy,
    ) -> Self {
        Self {
            id,
            fetcher,
            description,
            on_error,
        }
    }

    // Processes tasks until the task stream runs dry
    //
    // A failed page is sent down the result stream as an Err, the moment it
    // fails. Under ErrorPolicy::Isolate the worker then moves on to the next
    // task; under ErrorPolicy::Abort it stops. Sending from here (rather than
    // returning the error) puts it in the queue ahead of every result that
    // other workers finish later, so the consumer sees it first.
    pub async fn run(
        self,
        tasks: SharedTasks,
        results: mpsc::Sender<TaskOutcome>,
    ) -> Result<(), CrawlError> {
        loop {
            // The lock guard is dropped at the end of this block,
            // so other workers can pull tasks while we fetch
            let task = {
                let mut rx = tasks.lock().await;
                rx.recv().await
            };
            let Some(task) = task else {
                break;
            };

            tracing::debug!(worker = self.id, url = %task.url, "fetching");

            let (outcome, stop) = match self.describe(&task).await {
                Ok(description) => (Ok(task.into_result(description)), false),
                Err(source) => {
                    let err = CrawlError::Page {
                        url: task.url,
                        title: task.title,
                        source,
                    };
                    let stop = self.on_error == ErrorPolicy::Abort;
                    if !stop {
                        tracing::warn!(worker = self.id, error = %err, "task failed");
                    }
                    (Err(err), stop)
                }
            };

            if results.send(outcome).await.is_err() {
                tracing::debug!(worker = self.id, "result stream closed, stopping");
                break;
            }
            if stop {
                tracing::debug!(worker = self.id, "task failed, abandoning the crawl");
                break;
            }
        }

        tracing::debug!(worker = self.id, "worker finished");
        Ok(())
    }

    // Fetches the task's page and extracts its description
    async fn describe(&self, task: &Task) -> Result<String, FetchError> {
        let html = self.fetcher.fetch(&task.url).await?;
        Ok(clean_text(&self.description.text(&html)))
    }
}
