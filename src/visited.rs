//! Claim tracking for pages discovered during a crawl.
//!
//! `VisitedSet` is the dedup store the engine consults before spawning a
//! task for a page. Its one interesting operation is `insert`: an atomic
//! test-and-mark that reports "newly claimed" to exactly one caller per
//! page, no matter how many tasks discover the page concurrently. Marks
//! are monotonic: a claimed page stays claimed for the lifetime of the
//! set.

use crate::fetcher::PageId;
use dashmap::DashSet;
use std::collections::HashSet;

/// Concurrency-safe set of claimed pages.
#[derive(Debug, Default)]
pub struct VisitedSet {
    pages: DashSet<PageId>,
}

impl VisitedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims `page`.
    ///
    /// Returns `true` iff this call is the one that claimed it: across
    /// all concurrent callers, exactly one `insert` per page returns
    /// `true`, and that caller must process the page. Returns `false`
    /// if the page was already claimed.
    pub fn insert(&self, page: &PageId) -> bool {
        self.pages.insert(page.clone())
    }

    /// Checks whether `page` has been claimed.
    pub fn contains(&self, page: &PageId) -> bool {
        self.pages.contains(page)
    }

    /// Returns the number of claimed pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Checks whether no page has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Consumes the set, yielding the claimed pages.
    pub fn into_pages(self) -> HashSet<PageId> {
        self.pages.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_insert_claims_later_inserts_do_not() {
        let visited = VisitedSet::new();
        let page = PageId::from("http://golang.org/");
        assert!(visited.insert(&page));
        assert!(!visited.insert(&page));
        assert!(visited.contains(&page));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn distinct_pages_claim_independently() {
        let visited = VisitedSet::new();
        assert!(visited.insert(&"a".into()));
        assert!(visited.insert(&"b".into()));
        assert_eq!(visited.into_pages().len(), 2);
    }

    #[test]
    fn racing_claims_admit_exactly_one_winner() {
        let visited = Arc::new(VisitedSet::new());
        let page = PageId::from("http://golang.org/");

        let mut handles = Vec::new();
        for _ in 0..32 {
            let visited = Arc::clone(&visited);
            let page = page.clone();
            handles.push(std::thread::spawn(move || visited.insert(&page)));
        }

        let wins: usize = handles
            .into_iter()
            .map(|h| h.join().unwrap() as usize)
            .sum();
        assert_eq!(wins, 1);
        assert_eq!(visited.len(), 1);
    }
}
