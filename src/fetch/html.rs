// src/fetch/html.rs
// =============================================================================
// This module extracts raw links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which never fails on broken markup; it just
//   recovers as a browser would
//
// Note that we return hrefs exactly as written in the page. Resolving them
// against the page URL and deciding which ones to follow is the crawler's job.
// =============================================================================

use scraper::{Html, Selector};
use std::sync::OnceLock;

// The selector is a constant, so we parse it once and reuse it for every page
fn anchor_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("a[href]").expect("'a[href]' is a valid selector"))
}

// Extracts all href values from <a> tags
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of href values in document order, unmodified
//   (relative paths, fragments, mailto: links and so on are all kept)
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='#top'>Top</a>"
//   result = ["/docs", "#top"]
pub fn extract_links(html: &str) -> Vec<String> {
    if html.trim().is_empty() {
        return Vec::new();
    }

    let document = Html::parse_document(html);

    document
        .select(anchor_selector())
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_relative_and_absolute() {
        let html = r#"
            <a href="/a">A</a>
            <a href="https://other.example/x">Other</a>
            <a href="b.html">B</a>
        "#;
        let links = extract_links(html);
        assert_eq!(links, vec!["/a", "https://other.example/x", "b.html"]);
    }

    #[test]
    fn test_keeps_non_http_hrefs() {
        let html = r##"
            <a href="mailto:test@example.com">Email</a>
            <a href="#section">Jump</a>
            <a href="javascript:void(0)">JS</a>
        "##;
        let links = extract_links(html);
        assert_eq!(links.len(), 3);
        assert_eq!(links[1], "#section");
    }

    #[test]
    fn test_ignores_anchor_without_href() {
        let html = r#"<a name="top">Top</a><a href="/real">Real</a>"#;
        assert_eq!(extract_links(html), vec!["/real"]);
    }

    #[test]
    fn test_malformed_html_does_not_fail() {
        let html = r#"<div><a href="/ok">ok<p><a href="/also"</div"#;
        let links = extract_links(html);
        assert!(links.contains(&"/ok".to_string()));
    }

    #[test]
    fn test_empty_body() {
        assert!(extract_links("").is_empty());
        assert!(extract_links("not html at all").is_empty());
    }
}
