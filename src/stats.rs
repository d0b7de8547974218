//! # Statistics Module
//!
//! Collects counters describing a single crawl's operation.
//!
//! ## Overview
//!
//! A `CrawlStats` instance is created fresh for each crawl and shared
//! with the fetch tasks it spawns. Counters are atomic so tasks can
//! update them without coordination; `snapshot` captures a consistent,
//! plain view for reporting once the crawl has completed.
//!
//! ## Metrics tracked
//!
//! - **pages_claimed**: pages claimed and dispatched, exactly once each
//! - **fetches_succeeded / fetches_failed**: fetch task outcomes
//! - **links_discovered**: neighbor links reported by fetches, duplicates included
//! - **duplicates_skipped**: discoveries suppressed by the claim check
//! - **elapsed**: wall time from crawl start to snapshot

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Atomic counters for one crawl invocation.
#[derive(Debug)]
pub struct CrawlStats {
    start_time: Instant,
    pages_claimed: AtomicUsize,
    fetches_succeeded: AtomicUsize,
    fetches_failed: AtomicUsize,
    links_discovered: AtomicUsize,
    duplicates_skipped: AtomicUsize,
}

impl CrawlStats {
    /// Creates a new collector with all counters at zero.
    pub(crate) fn new() -> Self {
        CrawlStats {
            start_time: Instant::now(),
            pages_claimed: AtomicUsize::new(0),
            fetches_succeeded: AtomicUsize::new(0),
            fetches_failed: AtomicUsize::new(0),
            links_discovered: AtomicUsize::new(0),
            duplicates_skipped: AtomicUsize::new(0),
        }
    }

    /// Increments the count of claimed pages.
    pub(crate) fn increment_pages_claimed(&self) {
        self.pages_claimed.fetch_add(1, Ordering::SeqCst);
    }

    /// Increments the count of successful fetches.
    pub(crate) fn increment_fetches_succeeded(&self) {
        self.fetches_succeeded.fetch_add(1, Ordering::SeqCst);
    }

    /// Increments the count of failed fetches.
    pub(crate) fn increment_fetches_failed(&self) {
        self.fetches_failed.fetch_add(1, Ordering::SeqCst);
    }

    /// Adds to the count of discovered neighbor links.
    pub(crate) fn add_links_discovered(&self, links: usize) {
        self.links_discovered.fetch_add(links, Ordering::SeqCst);
    }

    /// Increments the count of discoveries suppressed as duplicates.
    pub(crate) fn increment_duplicates_skipped(&self) {
        self.duplicates_skipped.fetch_add(1, Ordering::SeqCst);
    }

    /// Captures a consistent snapshot of the counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pages_claimed: self.pages_claimed.load(Ordering::SeqCst),
            fetches_succeeded: self.fetches_succeeded.load(Ordering::SeqCst),
            fetches_failed: self.fetches_failed.load(Ordering::SeqCst),
            links_discovered: self.links_discovered.load(Ordering::SeqCst),
            duplicates_skipped: self.duplicates_skipped.load(Ordering::SeqCst),
            elapsed: self.start_time.elapsed(),
        }
    }
}

/// A plain, serializable view of a crawl's statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Pages claimed and dispatched, exactly once each.
    pub pages_claimed: usize,
    /// Fetches that returned a neighbor list.
    pub fetches_succeeded: usize,
    /// Fetches that failed and were absorbed as zero neighbors.
    pub fetches_failed: usize,
    /// Neighbor links reported by fetches, duplicates included.
    pub links_discovered: usize,
    /// Discoveries suppressed because the page was already claimed.
    pub duplicates_skipped: usize,
    /// Wall time from crawl start to snapshot.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl StatsSnapshot {
    /// Pages claimed per second of elapsed wall time.
    pub fn pages_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.pages_claimed as f64 / secs
        } else {
            0.0
        }
    }

    /// Converts the snapshot into a JSON string.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Converts the snapshot into a pretty-printed JSON string.
    pub fn to_json_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nCrawl Statistics")?;
        writeln!(f, "----------------")?;
        writeln!(f, "  duration : {:?}", self.elapsed)?;
        writeln!(f, "  speed    : {:.2} pages/s", self.pages_per_second())?;
        writeln!(
            f,
            "  pages    : claimed: {}, duplicates skipped: {}",
            self.pages_claimed, self.duplicates_skipped
        )?;
        writeln!(
            f,
            "  fetches  : ok: {}, failed: {}, links found: {}",
            self.fetches_succeeded, self.fetches_failed, self.links_discovered
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = CrawlStats::new();
        stats.increment_pages_claimed();
        stats.increment_pages_claimed();
        stats.increment_fetches_succeeded();
        stats.increment_fetches_failed();
        stats.add_links_discovered(3);
        stats.increment_duplicates_skipped();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.pages_claimed, 2);
        assert_eq!(snapshot.fetches_succeeded, 1);
        assert_eq!(snapshot.fetches_failed, 1);
        assert_eq!(snapshot.links_discovered, 3);
        assert_eq!(snapshot.duplicates_skipped, 1);
    }

    #[test]
    fn snapshot_exports_json() {
        let stats = CrawlStats::new();
        stats.increment_pages_claimed();

        let json = stats.snapshot().to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["pages_claimed"], 1);
        assert_eq!(value["fetches_failed"], 0);
    }

    #[test]
    fn display_mentions_every_counter() {
        let rendered = CrawlStats::new().snapshot().to_string();
        assert!(rendered.contains("pages"));
        assert!(rendered.contains("fetches"));
        assert!(rendered.contains("duration"));
    }
}
