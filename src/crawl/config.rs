// src/crawl/config.rs
// =============================================================================
// Crawl configuration: everything that stays fixed for one crawl run.
//
// All validation happens here, before the crawler touches the network:
// - the base URL must be an absolute http(s) URL with a host
// - max_pages and the timeout must be positive
// - ignore entries are resolved against the base URL, so "/b" works as well
//   as "https://example.com/b"
// =============================================================================

use crate::error::{Result, SitemapError};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

pub const DEFAULT_MAX_PAGES: usize = 50;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct CrawlConfig {
    base_url: Url,
    domain: String,
    max_pages: usize,
    ignore: HashSet<String>,
    timeout: Duration,
}

impl CrawlConfig {
    // Builds and validates a configuration
    //
    // Parameters:
    //   base_url: where the crawl starts (e.g., "https://example.com")
    //   max_pages: cap on successfully visited pages, must be >= 1
    //   ignore: URLs (absolute or relative to base_url) that are never crawled
    pub fn new(base_url: &str, max_pages: usize, ignore: &[String]) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| SitemapError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(SitemapError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", base.scheme()),
            });
        }

        let domain = domain_of(&base).ok_or_else(|| SitemapError::InvalidUrl {
            url: base_url.to_string(),
            reason: "URL has no host".to_string(),
        })?;

        if max_pages == 0 {
            return Err(SitemapError::Config(
                "max pages must be at least 1".to_string(),
            ));
        }

        let ignore = ignore
            .iter()
            .map(|entry| match base.join(entry) {
                Ok(resolved) => resolved.to_string(),
                Err(_) => entry.clone(),
            })
            .collect();

        Ok(Self {
            base_url: base,
            domain,
            max_pages,
            ignore,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(SitemapError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    pub fn is_ignored(&self, url: &str) -> bool {
        self.ignore.contains(url)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// The part of a URL two pages must share to count as the same site:
/// host plus any non-default port ("example.com", "127.0.0.1:8080").
pub fn domain_of(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
