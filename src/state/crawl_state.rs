//! Mutable traversal state for a single crawl run

use std::collections::HashSet;

/// Everything a crawl run learns while walking links
///
/// Owned by one crawler and touched only by its traversal, so it needs no locking.
#[derive(Debug, Clone, Default)]
pub struct CrawlState {
    /// Every candidate link seen so far, accepted or not
    visited: HashSet<String>,

    /// Pages whose text contained the search string, in discovery order
    found_links: Vec<String>,

    /// Consecutive skipped links since the last accepted one
    skip_count: u32,
}

impl CrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a link as visited and reports whether it already was
    ///
    /// The link is recorded on its first sighting whether or not it is later
    /// accepted, so a cross-domain link counts as visited too.
    pub fn check_and_mark_visited(&mut self, url: &str) -> bool {
        !self.visited.insert(url.to_string())
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Records a page containing the search string
    ///
    /// Returns false if the page was already recorded.
    pub fn record_match(&mut self, url: &str) -> bool {
        if self.found_links.iter().any(|found| found == url) {
            return false;
        }
        self.found_links.push(url.to_string());
        true
    }

    pub fn found_links(&self) -> &[String] {
        &self.found_links
    }

    pub fn found_count(&self) -> usize {
        self.found_links.len()
    }

    /// Counts one more skipped link and returns the new streak length
    pub fn record_skip(&mut self) -> u32 {
        self.skip_count += 1;
        self.skip_count
    }

    /// Ends the current skip streak
    pub fn reset_skips(&mut self) {
        self.skip_count = 0;
    }

    pub fn skip_count(&self) -> u32 {
        self.skip_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sighting_is_not_visited() {
        let mut state = CrawlState::new();
        assert!(!state.check_and_mark_visited("http://x.test/a"));
        assert!(state.is_visited("http://x.test/a"));
    }

    #[test]
    fn test_visited_insertion_is_idempotent() {
        let mut state = CrawlState::new();
        assert!(!state.check_and_mark_visited("http://x.test/a"));
        for _ in 0..5 {
            assert!(state.check_and_mark_visited("http://x.test/a"));
        }
        assert_eq!(state.visited_count(), 1);
    }

    #[test]
    fn test_visited_is_exact_string_match() {
        let mut state = CrawlState::new();
        state.check_and_mark_visited("http://x.test/a");
        assert!(!state.check_and_mark_visited("http://x.test/a#top"));
        assert_eq!(state.visited_count(), 2);
    }

    #[test]
    fn test_record_match_keeps_order_and_uniqueness() {
        let mut state = CrawlState::new();
        assert!(state.record_match("http://x.test/b"));
        assert!(state.record_match("http://x.test/a"));
        assert!(!state.record_match("http://x.test/b"));

        assert_eq!(
            state.found_links(),
            &["http://x.test/b".to_string(), "http://x.test/a".to_string()]
        );
        assert_eq!(state.found_count(), 2);
    }

    #[test]
    fn test_skip_streak() {
        let mut state = CrawlState::new();
        assert_eq!(state.record_skip(), 1);
        assert_eq!(state.record_skip(), 2);
        state.reset_skips();
        assert_eq!(state.skip_count(), 0);
        assert_eq!(state.record_skip(), 1);
    }
}
