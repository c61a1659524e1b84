// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Validate them into a CrawlConfig (before any network traffic)
// 3. Crawl the site
// 4. Write the sitemap and print a summary
// 5. Exit with proper code (0 = pages found, 1 = empty sitemap, 2 = error)
//
// Rust concepts used:
// - async/await: The HTTP client is async, so main runs on tokio
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the crawl loop and link filtering
mod error; // src/error.rs - error types
mod fetch; // src/fetch/ - HTTP fetching and link extraction
mod sitemap; // src/sitemap/ - XML sitemap output

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawl::{CrawlConfig, CrawlReport, Crawler};
use fetch::HttpFetcher;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr; stdout is left for the summary or the --json report.
// RUST_LOG (e.g. RUST_LOG=debug) takes precedence over --quiet.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// This is the main application logic
// Returns:
//   Ok(0) = sitemap written with at least one page
//   Ok(1) = sitemap written, but not even the base URL could be fetched
//   Err = bad configuration or the sitemap couldn't be written
async fn run(cli: Cli) -> Result<i32> {
    let config = CrawlConfig::new(&cli.url, cli.max_pages, &cli.ignore)?
        .with_timeout(Duration::from_secs(cli.timeout))?;

    let fetcher = HttpFetcher::new(config.timeout()).context("failed to build HTTP client")?;
    let crawler = Crawler::new(fetcher, config);

    let report = crawler.run().await;

    sitemap::write_sitemap(&report.urls, &cli.output)
        .with_context(|| format!("failed to write sitemap to {}", cli.output.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, crawler.config().base_url().as_str(), &cli.output);
    }

    if report.urls.is_empty() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn print_summary(report: &CrawlReport, base_url: &str, output: &Path) {
    println!();
    println!("🗺️  Sitemap generated: {}", output.display());
    println!("📊 Summary for {}:", base_url);
    println!("   ✅ Total URLs discovered: {}", report.urls.len());
    println!("   ❌ Failed fetches: {}", report.failed.len());
    println!("   🔗 Links seen: {}", report.links_discovered);

    if report.urls.is_empty() {
        println!("⚠️  No pages could be fetched; the sitemap is empty");
    }
}
