// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a base URL
// - Same-domain restriction (doesn't crawl external sites)
// - Skips non-HTML files, ignored URLs and already-visited pages
// - Stops after a configurable number of pages
//
// Submodules:
// - config: validated, immutable settings for one crawl run
// - crawler: the crawl loop and the link filter
// - filter: the individual link checks
// - queue: the FIFO frontier of URLs waiting to be fetched
// - visited: the ordered record of fetched pages
// =============================================================================

mod config;
mod crawler;
mod filter;
mod queue;
mod visited;

pub use config::{CrawlConfig, DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};
pub use crawler::{CrawlReport, Crawler};
