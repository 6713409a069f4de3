// src/crawl/task.rs
// =============================================================================
// The two values that flow through the pipeline.
//
// - Task: a link found on the seed page, not fetched yet
// - CrawlResult: a task after its page was fetched and described
//
// Both are plain owned values: created once, moved through a channel,
// consumed once. Nothing mutates them.
// =============================================================================

use serde::Serialize;

use crate::error::CrawlError;

// A link discovered on the seed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub url: String,
    pub title: String,
}

// A fully processed task
//
// url and title are copied from the Task; only description is new.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlResult {
    pub url: String,
    pub title: String,
    pub description: String,
}

// What the consumer receives for each unit of work
pub type TaskOutcome = Result<CrawlResult, CrawlError>;

impl Task {
    // Turns the task into its result, moving url and title over unchanged
    pub fn into_result(self, description: String) -> CrawlResult {
        CrawlResult {
            url: self.url,
            title: self.title,
            description,
        }
    }
}
