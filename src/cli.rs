// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every flag is optional; running `link-harvester` with no arguments
// scrapes the Hackernoon front page with 3 workers.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, ValueEnum};
use std::time::Duration;

use crate::crawl::{CrawlConfig, ErrorPolicy};
use crate::error::ConfigError;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-harvester",
    version,
    about = "Scrape the links on a page and fetch a description for each one",
    long_about = "link-harvester fetches a seed page, picks out links with a CSS selector, \
                  then fetches every linked page concurrently and prints the text matched \
                  by a second selector."
)]
pub struct Cli {
    /// Seed page that lists the links to follow
    #[arg(long, default_value = "https://hackernoon.com/")]
    pub url: String,

    /// CSS selector for the link elements on the seed page
    ///
    /// The element's href is the link, its text is the title
    #[arg(long, default_value = r#"main[class^="Page__Content"] h2 a"#)]
    pub title: String,

    /// CSS selector for the description on each linked page
    #[arg(long, default_value = "div.tldr")]
    pub description: String,

    /// Number of pages fetched at the same time (at least 1)
    #[arg(short, long, default_value_t = 3)]
    pub concurrency: usize,

    /// What to do when a linked page fails
    ///
    /// abort: stop everything on the first failure
    /// isolate: report the failure and keep crawling
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Abort)]
    pub on_error: ErrorPolicy,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output one JSON object per result instead of text blocks
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    // Validates the flags and turns them into a CrawlConfig
    pub fn to_config(&self) -> Result<CrawlConfig, ConfigError> {
        let config = CrawlConfig::new(&self.url, &self.title, &self.description, self.concurrency)?
            .with_error_policy(self.on_error)
            .with_timeout(self.timeout.map(Duration::from_secs));
        Ok(config)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is default_value vs default_value_t?
//    - default_value takes a string and parses it like user input
//    - default_value_t takes an already-typed value (usize, an enum, ...)
//
// 2. What does value_enum do?
//    - Lets clap accept enum variants by name: --on-error isolate
//    - The names come from #[derive(ValueEnum)], lowercased
//
// 3. Why Option<u64> for timeout?
//    - No flag = None = no timeout at all
//    - --timeout 10 = Some(10)
// -----------------------------------------------------------------------------
