// src/crawl/pipeline.rs
// =============================================================================
// This module wires the crawl stages together and drains the results.
//
//   generator --(task stream)--> N workers --(result stream)--> consumer
//                                    ^
//                    sentinel: waits for generator + workers,
//                              then closes the result stream
//
// Shutdown runs backwards along the pipeline:
// - The generator drops its Sender when done -> the task stream closes
// - Each worker stops when the task stream is closed and empty
// - The sentinel owns every stage in a JoinSet; once all of them have
//   finished it drops the last Sender -> the result stream closes
// - The consumer's recv() returns None -> run() returns the summary
//
// On a fatal error the consumer aborts the sentinel. Dropping its JoinSet
// aborts the generator and every worker still running, so nothing more is
// fetched or reported.
//
// Rust concepts:
// - JoinSet: A group of spawned tasks you can await one by one
// - mpsc channels: Multi-producer, single-consumer queues between tasks
// - Arc<Mutex<...>>: Sharing one Receiver between many workers
// =============================================================================

use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::{JoinHandle, JoinSet};

use super::config::CrawlConfig;
use super::generator::generate_tasks;
use super::task::{Task, TaskOutcome};
use super::worker::{SharedTasks, Worker};
use crate::error::CrawlError;
use crate::fetch::Fetcher;

// tokio channels need room for at least one message;
// one is as close as we get to a hand-to-hand exchange
const STREAM_CAPACITY: usize = 1;

// Counts of what the consumer saw during a completed crawl
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    pub described: usize,
    pub failed: usize,
}

impl CrawlSummary {
    pub fn total(&self) -> usize {
        self.described + self.failed
    }
}

pub struct Crawler {
    fetcher: Arc<dyn Fetcher>,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    // Runs the whole crawl, calling `on_outcome` for each result as it arrives
    //
    // Parameters:
    //   on_outcome: the consumer's report callback; receives Ok(result) for
    //               every described page, and Err(page error) for failed
    //               pages when the policy is Isolate
    //
    // Returns:
    //   Ok(summary) once the result stream has closed
    //   Err(e) on the first fatal error; whatever was already reported stays
    //   reported, nothing after it is
    pub async fn run<F>(&self, mut on_outcome: F) -> Result<CrawlSummary, CrawlError>
    where
        F: FnMut(&TaskOutcome),
    {
        tracing::info!(
            seed = %self.config.seed_url,
            title = self.config.title.as_str(),
            description = self.config.description.as_str(),
            concurrency = self.config.concurrency,
            on_error = ?self.config.on_error,
            "starting crawl"
        );

        let (result_tx, mut result_rx) = mpsc::channel::<TaskOutcome>(STREAM_CAPACITY);
        let sentinel = self.spawn_stages(result_tx);

        let mut summary = CrawlSummary::default();
        while let Some(outcome) = result_rx.recv().await {
            match outcome {
                Err(err) if err.is_fatal(self.config.on_error) => {
                    // The caller prints the error itself
                    tracing::debug!(error = %err, "crawl aborted");
                    sentinel.abort();
                    return Err(err);
                }
                outcome => {
                    if outcome.is_ok() {
                        summary.described += 1;
                    } else {
                        summary.failed += 1;
                    }
                    on_outcome(&outcome);
                }
            }
        }

        // The stream only closes after the sentinel let go of its Sender
        sentinel
            .await
            .map_err(|e| CrawlError::Unit(e.to_string()))?;

        tracing::info!(
            described = summary.described,
            failed = summary.failed,
            "crawl finished"
        );
        Ok(summary)
    }

    // Spawns the generator, the workers and the sentinel watching them
    //
    // Returns: the sentinel's handle (aborting it tears everything down)
    fn spawn_stages(&self, results: mpsc::Sender<TaskOutcome>) -> JoinHandle<()> {
        let (task_tx, task_rx) = mpsc::channel::<Task>(STREAM_CAPACITY);
        let mut stages = JoinSet::new();

        let fetcher = Arc::clone(&self.fetcher);
        let seed_url = self.config.seed_url.clone();
        let title = self.config.title.clone();
        stages.spawn(async move {
            let emitted = generate_tasks(fetcher, seed_url, title, task_tx).await?;
            tracing::debug!(emitted, "task stream closed");
            Ok::<(), CrawlError>(())
        });

        let tasks: SharedTasks = Arc::new(Mutex::new(task_rx));
        for id in 0..self.config.concurrency {
            let worker = Worker::new(
                id,
                Arc::clone(&self.fetcher),
                self.config.description.clone(),
                self.config.on_error,
            );
            stages.spawn(worker.run(Arc::clone(&tasks), results.clone()));
        }

        tokio::spawn(close_when_done(stages, results))
    }
}

// The completion sentinel
//
// Awaits every stage, forwarding stage errors (a failed seed page, a
// panicked stage) into the result stream, then drops `results`. Page
// errors never come through here: workers send those themselves. Workers hold the other Senders and drop theirs as they
// finish, so the stream closes exactly once: after the last stage is done.
async fn close_when_done(
    mut stages: JoinSet<Result<(), CrawlError>>,
    results: mpsc::Sender<TaskOutcome>,
) {
    while let Some(joined) = stages.join_next().await {
        let err = match joined {
            Ok(Ok(())) => continue,
            Ok(Err(err)) => err,
            Err(join_err) => CrawlError::Unit(join_err.to_string()),
        };
        if results.send(Err(err)).await.is_err() {
            break;
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the sentinel run in its own task?
//    - The consumer has to keep draining results while workers run
//    - If the consumer waited for the workers first, a worker blocked on a
//      full result channel would wait forever
//
// 2. How do we know the result stream is closed exactly once?
//    - An mpsc channel closes when the last Sender is dropped
//    - Each worker owns one clone, the sentinel owns the original
//    - The sentinel drops its Sender only after every worker has returned
//
// 3. What does abort() do?
//    - Cancels the task at its next .await
//    - Dropping a JoinSet aborts every task still in it
//    - So aborting the sentinel stops the generator and all workers
//
// 4. What is `Err(err) if ...` in a match?
//    - A match guard: the arm only matches when the condition is true
//    - Non-fatal errors fall through to the next arm and get reported
// -----------------------------------------------------------------------------
