// src/report.rs
// =============================================================================
// Prints what the crawl found.
//
// Two output modes:
// - text: one multi-line block per result (Url / Title / Description)
// - json: one JSON object per line, easy to pipe into `jq`
//
// Results are printed the moment they arrive, so the order follows whichever
// worker finished first, not the order of links on the seed page.
// =============================================================================

use serde::Serialize;
use std::io::{self, Write};

use crate::crawl::{CrawlResult, CrawlSummary, TaskOutcome};
use crate::error::CrawlError;

// The JSON shape of one line of output
//
// #[serde(tag = "status")] adds "status": "described" / "failed"
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ReportLine<'a> {
    Described {
        url: &'a str,
        title: &'a str,
        description: &'a str,
    },
    Failed {
        url: &'a str,
        title: &'a str,
        error: String,
    },
}

impl<'a> ReportLine<'a> {
    fn from_outcome(outcome: &'a TaskOutcome) -> Self {
        match outcome {
            Ok(result) => result.into(),
            Err(CrawlError::Page { url, title, source }) => ReportLine::Failed {
                url,
                title,
                error: source.to_string(),
            },
            // Seed and unit errors are fatal under every policy: Crawler::run
            // returns them instead of handing them to the reporter
            Err(other) => unreachable!("fatal error passed to the reporter: {}", other),
        }
    }
}

impl<'a> From<&'a CrawlResult> for ReportLine<'a> {
    fn from(result: &'a CrawlResult) -> Self {
        ReportLine::Described {
            url: &result.url,
            title: &result.title,
            description: &result.description,
        }
    }
}

// Writes one outcome in the chosen format
pub fn write_outcome<W: Write>(out: &mut W, outcome: &TaskOutcome, json: bool) -> io::Result<()> {
    let line = ReportLine::from_outcome(outcome);

    if json {
        serde_json::to_writer(&mut *out, &line)?;
        return writeln!(out);
    }

    match line {
        ReportLine::Described {
            url,
            title,
            description,
        } => writeln!(out, "Url: {}\nTitle: {}\nDescription: {}\n", url, title, description),
        ReportLine::Failed { url, title, error } => {
            writeln!(out, "Url: {}\nTitle: {}\nError: {}\n", url, title, error)
        }
    }
}

// Prints the counts at the end of a text-mode crawl
pub fn write_summary<W: Write>(out: &mut W, summary: &CrawlSummary) -> io::Result<()> {
    writeln!(out, "📊 Summary:")?;
    writeln!(out, "   ✅ Described: {}", summary.described)?;
    writeln!(out, "   ❌ Failed: {}", summary.failed)?;
    writeln!(out, "   📋 Total: {}", summary.total())
}
