// src/crawl/filter.rs
// =============================================================================
// Building blocks of the link filter.
//
// A discovered link is only queued if it passes every check. When it doesn't,
// we keep track of *which* check failed (the Rejection enum), which makes the
// debug log readable and lets tests assert on the exact reason.
// =============================================================================

use std::fmt;
use url::Url;

/// File types that are never HTML pages, so never worth fetching.
pub const BLOCKED_SUFFIXES: &[&str] = &[
    ".pdf", ".jpg", ".jpeg", ".png", ".gif", ".zip", ".csv", ".docx", ".xlsx", ".txt",
];

/// Why a link was not queued, in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OtherDomain,
    UnsupportedScheme,
    BlockedFile,
    AlreadyVisited,
    Ignored,
    PageLimitReached,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::OtherDomain => "different domain",
            Rejection::UnsupportedScheme => "not http or https",
            Rejection::BlockedFile => "non-HTML file",
            Rejection::AlreadyVisited => "already visited",
            Rejection::Ignored => "in ignore list",
            Rejection::PageLimitReached => "page limit reached",
        };
        f.write_str(reason)
    }
}

pub fn is_http_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

// Checks whether a URL points at a file we don't want in the sitemap
//
// Both the path and the full URL are checked, so "/report.PDF" and
// "/download?file=report.pdf" are caught alike
pub fn is_blocked_file(url: &Url) -> bool {
    let path = url.path().to_ascii_lowercase();
    let full = url.as_str().to_ascii_lowercase();

    BLOCKED_SUFFIXES
        .iter()
        .any(|suffix| path.ends_with(suffix) || full.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_blocked_suffixes() {
        assert!(is_blocked_file(&url("https://example.com/report.pdf")));
        assert!(is_blocked_file(&url("https://example.com/img/Logo.PNG")));
        assert!(is_blocked_file(&url("https://example.com/data.csv?v=2")));
        assert!(is_blocked_file(&url("https://example.com/get?name=notes.txt")));
    }

    #[test]
    fn test_html_pages_not_blocked() {
        assert!(!is_blocked_file(&url("https://example.com/")));
        assert!(!is_blocked_file(&url("https://example.com/about")));
        assert!(!is_blocked_file(&url("https://example.com/index.html")));
        // Suffix must be at the very end
        assert!(!is_blocked_file(&url("https://example.com/pdf-guide")));
    }

    #[test]
    fn test_http_scheme() {
        assert!(is_http_scheme(&url("http://example.com")));
        assert!(is_http_scheme(&url("https://example.com")));
        assert!(!is_http_scheme(&url("ftp://example.com/file")));
        assert!(!is_http_scheme(&url("mailto:me@example.com")));
        assert!(!is_http_scheme(&url("javascript:void(0)")));
    }
}
