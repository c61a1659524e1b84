// src/fetch/mod.rs
// =============================================================================
// This module contains the crawler's two collaborators.
//
// Submodules:
// - http: Downloads a page and reports its status code and body
// - html: Pulls raw href values out of an HTML page
//
// The crawler only talks to the Fetcher trait, so tests can swap the real
// HTTP client for an in-memory fake.
// =============================================================================

mod html;
mod http;

pub use html::extract_links;
pub use http::{Fetcher, HttpFetcher, Page};
