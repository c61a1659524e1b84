// src/crawl/crawler.rs
// =============================================================================
// This module implements the breadth-first crawl.
//
// How it works:
// 1. Start with the base URL in the frontier
// 2. Take the next URL from the front of the frontier
// 3. Fetch it; if that fails (timeout, 404, ...) log it and move on
// 4. Record the page as visited
// 5. Resolve every link on the page and queue the ones that pass the filter
// 6. Repeat until the frontier is empty or we've visited max_pages pages
//
// The crawl never fails as a whole: a bad page is just a dead end.
//
// Rust concepts:
// - Generics: Crawler<F> works with any Fetcher (real HTTP or a test fake)
// - let-else: early `continue` when a value isn't there
// =============================================================================

use crate::crawl::config::{domain_of, CrawlConfig};
use crate::crawl::filter::{is_blocked_file, is_http_scheme, Rejection};
use crate::crawl::queue::Frontier;
use crate::crawl::visited::VisitedLog;
use crate::fetch::{extract_links, Fetcher, Page};
use serde::Serialize;
use tracing::{debug, info, warn};
use url::Url;

/// A page that could not be added to the sitemap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFetch {
    pub url: String,
    pub reason: String,
}

/// Outcome of one crawl run.
#[derive(Debug, Default, Serialize)]
pub struct CrawlReport {
    /// Visited pages, in the order they were fetched
    pub urls: Vec<String>,
    pub failed: Vec<FailedFetch>,
    /// Frontier entries dropped because the page had already been visited
    pub skipped_duplicates: usize,
    /// Frontier entries dropped because they are on the ignore list
    pub skipped_ignored: usize,
    pub links_discovered: usize,
    pub links_enqueued: usize,
}

pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    // Crawls the site and returns everything we found
    //
    // The frontier and visited log live only for the duration of this call,
    // so running the same crawler twice starts from scratch both times
    pub async fn run(&self) -> CrawlReport {
        let max_pages = self.config.max_pages();
        let mut frontier = Frontier::starting_at(self.config.base_url().clone());
        let mut visited = VisitedLog::default();
        let mut report = CrawlReport::default();

        info!(
            "Crawling {} (domain {}, up to {} pages)",
            self.config.base_url(),
            self.config.domain(),
            max_pages
        );

        while !frontier.is_empty() && visited.len() < max_pages {
            let Some(current) = frontier.pop() else {
                break;
            };

            // The same URL can be queued more than once before it's fetched
            if visited.contains(current.as_str()) {
                report.skipped_duplicates += 1;
                continue;
            }

            // Links are filtered before they're queued, but the base URL
            // goes in unchecked
            if self.config.is_ignored(current.as_str()) {
                debug!("Skipping {}: {}", current, Rejection::Ignored);
                report.skipped_ignored += 1;
                continue;
            }

            let page: Page = match self.fetcher.fetch(&current).await {
                Ok(page) if page.is_ok() => page,
                Ok(page) => {
                    let reason = format!("HTTP {}", page.status);
                    warn!("Could not fetch {}: {}", current, reason);
                    report.failed.push(FailedFetch {
                        url: current.to_string(),
                        reason,
                    });
                    continue;
                }
                Err(e) => {
                    warn!("Could not fetch {}: {}", current, e);
                    report.failed.push(FailedFetch {
                        url: current.to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            visited.insert(current.as_str());
            info!("Visited: {}", current);

            for href in extract_links(&page.body) {
                report.links_discovered += 1;

                let Some(link) = resolve_link(&current, &href) else {
                    debug!("Could not resolve '{}' on {}", href, current);
                    continue;
                };

                match self.check(&link, &visited) {
                    Ok(()) => {
                        report.links_enqueued += 1;
                        frontier.push(link);
                    }
                    Err(reason) => debug!("Skipping {}: {}", link, reason),
                }
            }
        }

        debug!(
            "Crawl finished with {} URL(s) left in the frontier",
            frontier.len()
        );

        report.urls = visited.into_urls();
        report
    }

    /// Decides whether a discovered link should be queued.
    ///
    /// Checks run in a fixed order and the first one that fails is returned:
    /// domain, scheme, file type, visited, ignore list, page cap.
    pub fn check(&self, url: &Url, visited: &VisitedLog) -> Result<(), Rejection> {
        if domain_of(url).as_deref() != Some(self.config.domain()) {
            return Err(Rejection::OtherDomain);
        }
        if !is_http_scheme(url) {
            return Err(Rejection::UnsupportedScheme);
        }
        if is_blocked_file(url) {
            return Err(Rejection::BlockedFile);
        }
        if visited.contains(url.as_str()) {
            return Err(Rejection::AlreadyVisited);
        }
        if self.config.is_ignored(url.as_str()) {
            return Err(Rejection::Ignored);
        }
        if visited.len() >= self.config.max_pages() {
            return Err(Rejection::PageLimitReached);
        }
        Ok(())
    }
}

// Resolves a (possibly relative) href against the page it was found on
//
// The fragment is dropped: "#top" and "/page#intro" point at pages we
// already know about, not at new ones
fn resolve_link(page_url: &Url, href: &str) -> Option<Url> {
    let mut url = page_url.join(href).ok()?;
    url.set_fragment(None);
    Some(url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is the crawler generic over F: Fetcher?
//    - In main we plug in HttpFetcher, which really talks to the network
//    - In tests we plug in FakeSite, a HashMap of canned pages
//    - The crawl logic is identical in both cases, and tests run offline
//
// 2. What is let-else?
//    - let Some(x) = expr else { ... };
//    - Binds x if the pattern matches, otherwise runs the else block,
//      which must leave the current scope (break, continue, return)
//
// 3. Why `Ok(page) if page.is_ok()`?
//    - A match guard: the arm only matches when the condition holds
//    - So a 404 falls through to the next `Ok(page)` arm
//
// 4. Why does check() look at the page cap again?
//    - The while condition is what actually stops the crawl
//    - Checking here too just avoids queueing links we'll never fetch
// -----------------------------------------------------------------------------
