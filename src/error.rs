// src/error.rs
// =============================================================================
// Error types used across the crate.
//
// Two families:
// - FetchError: one page could not be fetched. The crawler logs these and
//   keeps going, so they never abort a run.
// - SitemapError: something is wrong with the run itself (bad configuration,
//   output file not writable). These bubble up to main and end the process.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from the #[error] text
// - #[from]: lets the ? operator convert other error types into ours
// =============================================================================

use thiserror::Error;

/// A transport-level failure while fetching a single page.
///
/// Non-200 responses are not represented here: the fetcher hands back the
/// status code and the crawler decides what to do with it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("could not resolve hostname")]
    Dns,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("too many redirects")]
    TooManyRedirects,

    #[error("{0}")]
    Transport(String),
}

/// A failure that ends the whole run.
#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SitemapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert_eq!(
            FetchError::Connect("refused".to_string()).to_string(),
            "connection failed: refused"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            let write: std::io::Result<()> = Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ));
            write?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(err, SitemapError::Io(_)));
        assert_eq!(err.to_string(), "IO error: denied");
    }
}
