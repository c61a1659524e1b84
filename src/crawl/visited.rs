// src/crawl/visited.rs
// =============================================================================
// Record of the pages we've successfully fetched.
//
// It serves two purposes:
// - Fast "have we seen this?" checks while crawling (HashSet)
// - The final sitemap, in the order pages were fetched (Vec)
//
// A HashSet alone would answer the first question but iterates in random
// order, so we keep both side by side.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedLog {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl VisitedLog {
    // Records a visit
    //
    // Returns: true if the URL was new, false if it was already recorded
    pub fn insert(&mut self, url: &str) -> bool {
        if !self.seen.insert(url.to_string()) {
            return false;
        }
        self.order.push(url.to_string());
        true
    }

    pub fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn into_urls(self) -> Vec<String> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_insertion_order() {
        let mut visited = VisitedLog::default();
        for url in ["https://e.com/z", "https://e.com/a", "https://e.com/m"] {
            assert!(visited.insert(url));
        }
        assert_eq!(
            visited.into_urls(),
            vec!["https://e.com/z", "https://e.com/a", "https://e.com/m"]
        );
    }

    #[test]
    fn test_insert_twice() {
        let mut visited = VisitedLog::default();
        assert!(visited.insert("https://e.com/"));
        assert!(!visited.insert("https://e.com/"));
        assert_eq!(visited.len(), 1);
        assert!(visited.contains("https://e.com/"));
        assert!(!visited.contains("https://e.com/other"));
    }
}
