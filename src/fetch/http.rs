// src/fetch/http.rs
// =============================================================================
// This module downloads pages over HTTP.
//
// Key functionality:
// - A small Fetcher trait so the crawler doesn't depend on reqwest directly
// - HttpFetcher: the real implementation, one GET per call, no retries
// - Transport errors (timeout, DNS, refused connection...) are sorted into
//   FetchError variants so the crawl log says *why* a page was skipped
//
// Rust concepts:
// - Traits with async fn: the crawler is generic over any Fetcher
// - Result<T, E>: a page either comes back (with any status) or it doesn't
// =============================================================================

use crate::error::{FetchError, SitemapError};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A downloaded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Anything that can turn a URL into a [`Page`].
pub trait Fetcher {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError>;
}

/// Fetcher backed by a reqwest client with a fixed per-request timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Creates the HTTP client once; reqwest pools connections internally,
    // so reusing one client for the whole crawl is much cheaper than
    // building a new one per page
    pub fn new(timeout: Duration) -> Result<Self, SitemapError> {
        let client = Client::builder()
            .user_agent(concat!("sitemap-gen/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page, FetchError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(categorize_error)?;

        let status = response.status().as_u16();

        // Anything but 200 is a dead end for the crawler, so don't bother
        // downloading the body
        if status != 200 {
            return Ok(Page {
                status,
                body: String::new(),
            });
        }

        let body = response.text().await.map_err(categorize_error)?;
        Ok(Page { status, body })
    }
}

// Categorizes different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - Too many redirects
// - Connection refused / reset
fn categorize_error(error: reqwest::Error) -> FetchError {
    let error_string = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        let detail = source_chain(&error);
        if detail.to_lowercase().contains("dns") {
            FetchError::Dns
        } else {
            FetchError::Connect(detail)
        }
    } else {
        FetchError::Transport(error_string)
    }
}

// reqwest's top-level message is generic ("error sending request"), the
// useful part lives in the source chain
fn source_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn url(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), p)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok_page() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/html")
                    .set_body_string("<html><body>hello</body></html>"),
            )
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let page = fetcher.fetch(&url(&mock_server, "/")).await.unwrap();

        assert!(page.is_ok());
        assert!(page.body.contains("hello"));
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_a_page_not_an_error() {
        let mock_server = MockServer::start().await;

        let fetcher = HttpFetcher::new(Duration::from_secs(5)).unwrap();
        let page = fetcher.fetch(&url(&mock_server, "/missing")).await.unwrap();

        assert_eq!(page.status, 404);
        assert!(!page.is_ok());
        assert!(page.body.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&mock_server)
            .await;

        let fetcher = HttpFetcher::new(Duration::from_millis(200)).unwrap();
        let result = fetcher.fetch(&url(&mock_server, "/slow")).await;

        assert_eq!(result, Err(FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Grab a free port, then close it so nothing is listening there
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let target = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

        let fetcher = HttpFetcher::new(Duration::from_secs(2)).unwrap();
        let result = fetcher.fetch(&target).await;

        assert!(matches!(result, Err(FetchError::Connect(_))));
    }

    #[test]
    fn test_page_is_ok_only_for_200() {
        let page = |status| Page {
            status,
            body: String::new(),
        };
        assert!(page(200).is_ok());
        assert!(!page(204).is_ok());
        assert!(!page(301).is_ok());
        assert!(!page(500).is_ok());
    }
}
