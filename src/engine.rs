//! # Engine Module
//!
//! Implements the concurrent crawl engine that orchestrates the whole
//! exploration.
//!
//! ## Overview
//!
//! `Crawler` drives a graph exploration through a caller-supplied
//! [`Fetcher`]: it claims each discovered page exactly once, spawns a
//! fetch task per claimed page, and completes when no task remains
//! outstanding. Work is discovered dynamically (a task may report
//! neighbors the engine has never seen), so completion is detected by
//! counting, not by knowing the total up front.
//!
//! ## Architecture
//!
//! A single coordinating loop owns an unbounded channel of neighbor
//! batches. Every fetch task sends exactly one batch (its neighbors, or
//! an empty batch on fetch failure), so the loop's in-flight counter,
//! incremented before each task is spawned and decremented after its
//! batch is fully dispatched, drains to zero precisely when the
//! reachable graph is exhausted. The loop is the sole owner of the claim set and
//! the counter; fetch tasks share nothing but the batch sender and the
//! stats counters. The root batch is enqueued from its own task so the
//! initial send never shares an execution context with the receive loop.
//!
//! ## Example
//!
//! ```rust,ignore
//! use crawl_core::{Crawler, StaticFetcher};
//!
//! let fetcher = StaticFetcher::new()
//!     .with_page("a", ["b", "c"])
//!     .with_page("b", ["a"])
//!     .with_page("c", []);
//!
//! let outcome = Crawler::new(fetcher).crawl("a").await;
//! assert_eq!(outcome.visited.len(), 3);
//! ```

use crate::fetcher::{Fetcher, PageId};
use crate::state::InFlight;
use crate::stats::{CrawlStats, StatsSnapshot};
use crate::visited::VisitedSet;
use kanal::{unbounded_async, AsyncSender};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, info, trace};

/// The concurrent crawl engine.
///
/// Owns the fetcher; all per-crawl state is created fresh inside
/// [`crawl`](Crawler::crawl), so one `Crawler` can run any number of
/// crawls, sequentially or concurrently, without interference.
pub struct Crawler<F: Fetcher> {
    fetcher: Arc<F>,
}

/// The result of a completed crawl.
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// Every page claimed during the crawl: exactly the set reachable
    /// from the root through the fetcher's neighbor relation.
    pub visited: HashSet<PageId>,
    /// Counters collected while the crawl ran.
    pub stats: StatsSnapshot,
}

impl CrawlOutcome {
    /// Checks whether `page` was visited.
    pub fn contains(&self, page: &PageId) -> bool {
        self.visited.contains(page)
    }

    /// Returns the number of visited pages.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Checks whether the crawl visited no pages.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

impl<F: Fetcher + 'static> Crawler<F> {
    /// Creates an engine around the given fetcher.
    pub fn new(fetcher: F) -> Self {
        Crawler {
            fetcher: Arc::new(fetcher),
        }
    }

    /// Returns a reference to the fetcher this engine drives.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Crawls every page reachable from `root`, visiting each exactly
    /// once, and returns when no task remains outstanding.
    ///
    /// Fetch failures are absorbed locally: a page whose fetch fails
    /// contributes no neighbors but still counts as visited. No ordering
    /// is guaranteed among sibling visits.
    pub async fn crawl(&self, root: impl Into<PageId>) -> CrawlOutcome {
        let root = root.into();
        info!("crawl starting from {}", root);

        let visited = VisitedSet::new();
        let mut inflight = InFlight::new();
        let stats = Arc::new(CrawlStats::new());
        let (batch_tx, batch_rx) = unbounded_async::<Vec<PageId>>();

        // The seed counts as one in-flight producer and is sent from its
        // own task, never from the context that runs the receive loop.
        inflight.task_started();
        let seed_tx = batch_tx.clone();
        let seed = root.clone();
        tokio::spawn(async move {
            if seed_tx.send(vec![seed]).await.is_err() {
                error!("batch channel closed before the root batch was enqueued");
            }
        });

        while let Ok(batch) = batch_rx.recv().await {
            for page in batch {
                if !visited.insert(&page) {
                    trace!("already claimed, skipping: {}", page);
                    stats.increment_duplicates_skipped();
                    continue;
                }
                debug!("claimed: {}", page);
                stats.increment_pages_claimed();
                inflight.task_started();
                tokio::spawn(fetch_task(
                    page,
                    Arc::clone(&self.fetcher),
                    batch_tx.clone(),
                    Arc::clone(&stats),
                ));
            }
            // The batch's producer has now had all of its discoveries
            // dispatched.
            inflight.task_finished();
            if inflight.is_done() {
                break;
            }
        }

        let outcome = CrawlOutcome {
            visited: visited.into_pages(),
            stats: stats.snapshot(),
        };
        info!(
            "crawl finished from {}: {} pages visited",
            root,
            outcome.visited.len()
        );
        outcome
    }
}

/// One unit of crawl work: fetch a page and report its neighbors.
///
/// Sends exactly one batch, empty on fetch failure; the coordinator's
/// counter depends on that.
async fn fetch_task<F: Fetcher>(
    page: PageId,
    fetcher: Arc<F>,
    batch_tx: AsyncSender<Vec<PageId>>,
    stats: Arc<CrawlStats>,
) {
    let neighbors = match fetcher.fetch(&page).await {
        Ok(neighbors) => {
            trace!("fetched {}: {} neighbors", page, neighbors.len());
            stats.increment_fetches_succeeded();
            stats.add_links_discovered(neighbors.len());
            neighbors
        }
        Err(err) => {
            debug!("{}, treating page as having no neighbors", err);
            stats.increment_fetches_failed();
            Vec::new()
        }
    };

    if batch_tx.send(neighbors).await.is_err() {
        error!("batch channel closed before the task for {} reported", page);
    }
}
