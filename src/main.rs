// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (to stderr, so stdout only carries the report)
// 3. Run the crawl, printing each result as it arrives
// 4. Exit with proper code (0 = all described, 1 = some pages failed,
//    2 = crawl aborted or bad input)
//
// Rust concepts used:
// - async/await: Because we need to make many network requests concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Closures: The report callback passed to Crawler::run
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the generator / worker / consumer pipeline
mod error; // src/error.rs - error types
mod fetch; // src/fetch/ - HTTP and HTML querying
mod report; // src/report.rs - printing results

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use cli::{Cli, LogFormat};
use crawl::Crawler;
use fetch::HttpFetcher;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // One line naming the failing URL and the cause
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every linked page was described
//   Ok(1) = crawl finished but some pages failed (--on-error isolate)
//   Err = fatal error (bad flags, seed page failed, page failed under abort)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    setup_tracing(cli.log_format, cli.verbose)?;

    let config = cli.to_config()?;
    let fetcher = HttpFetcher::new(config.timeout)?;
    let crawler = Crawler::new(Arc::new(fetcher), config);

    let json = cli.json;
    let summary = crawler
        .run(|outcome| {
            if let Err(e) = report::write_outcome(&mut std::io::stdout(), outcome, json) {
                tracing::warn!(error = %e, "could not write result");
            }
        })
        .await?;

    if !json {
        let mut stdout = std::io::stdout();
        report::write_summary(&mut stdout, &summary)?;
        stdout.flush()?;
    }

    if summary.failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Sends tracing output to stderr
//
// RUST_LOG wins if set; otherwise --verbose picks debug or info
fn setup_tracing(format: LogFormat, verbose: bool) -> Result<()> {
    let default_filter = if verbose {
        "link_harvester=debug,info"
    } else {
        "link_harvester=info,warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
