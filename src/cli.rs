// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using a
// Rust struct and attributes (the #[...] things). clap turns the doc
// comments on each field into the --help text.
//
// Example:
//   sitemap-gen https://example.com -m 100 -o public/sitemap.xml \
//       -i https://example.com/admin /drafts
// =============================================================================

use crate::crawl::{DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sitemap-gen",
    version,
    about = "Crawl a website and generate an XML sitemap",
    long_about = "sitemap-gen crawls a website breadth-first, starting from the given URL, \
                  follows links that stay on the same domain and writes every page it \
                  could fetch to a sitemaps.org XML sitemap."
)]
pub struct Cli {
    /// Base URL of the website (e.g., https://example.com)
    pub url: String,

    /// Maximum number of pages to include in the sitemap
    #[arg(short, long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Output XML file
    #[arg(short, long, default_value = "sitemap.xml")]
    pub output: PathBuf,

    /// URLs to leave out of the crawl (absolute, or relative to the base URL)
    #[arg(short, long, num_args = 0.., value_name = "URL")]
    pub ignore: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS, value_name = "SECS")]
    pub timeout: u64,

    /// Print the crawl report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sitemap-gen", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert_eq!(cli.max_pages, 50);
        assert_eq!(cli.output, PathBuf::from("sitemap.xml"));
        assert!(cli.ignore.is_empty());
        assert_eq!(cli.timeout, 5);
        assert!(!cli.json);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "sitemap-gen",
            "https://example.com",
            "-m",
            "10",
            "-o",
            "out.xml",
            "-i",
            "/a",
            "https://example.com/b",
        ])
        .unwrap();
        assert_eq!(cli.max_pages, 10);
        assert_eq!(cli.output, PathBuf::from("out.xml"));
        assert_eq!(cli.ignore, vec!["/a", "https://example.com/b"]);
    }

    #[test]
    fn test_ignore_with_no_values() {
        let cli = Cli::try_parse_from(["sitemap-gen", "https://example.com", "--ignore"]).unwrap();
        assert!(cli.ignore.is_empty());
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["sitemap-gen"]).is_err());
    }

    #[test]
    fn test_negative_max_pages_rejected() {
        assert!(Cli::try_parse_from(["sitemap-gen", "https://example.com", "-m", "-3"]).is_err());
    }
}
