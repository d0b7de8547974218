//! # Fetcher Module
//!
//! Defines the `Fetcher` trait, the engine's only external boundary,
//! along with the `PageId` identifier type and a canned in-memory
//! implementation for fixtures.
//!
//! ## Overview
//!
//! A `Fetcher` maps a page identifier to the identifiers of its outbound
//! neighbors. The engine treats it as an opaque, possibly-failing,
//! possibly-slow capability: it may be backed by network I/O, a database,
//! or a fixed table. Everything the engine guarantees (exactly-once
//! visits, termination) holds for any implementation of this trait.
//!
//! ## Example
//!
//! ```rust,ignore
//! use crawl_core::{async_trait, FetchError, Fetcher, PageId};
//!
//! struct ListingFetcher;
//!
//! #[async_trait]
//! impl Fetcher for ListingFetcher {
//!     async fn fetch(&self, page: &PageId) -> Result<Vec<PageId>, FetchError> {
//!         // resolve `page` to its outbound links
//!         Ok(Vec::new())
//!     }
//! }
//! ```

use crate::error::FetchError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Opaque identifier for a page in the crawl graph, e.g. a URL.
///
/// The engine assumes no internal structure, only equality, hashing,
/// and ordering. Clones are cheap (shared string), so identifiers can be
/// handed to spawned tasks freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(Arc<str>);

impl PageId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        PageId(Arc::from(s))
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        PageId(Arc::from(s))
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The external fetch capability consumed by the engine.
///
/// Given a page identifier, returns the identifiers of its outbound
/// neighbors, or fails. Retries, timeouts, and rate limiting are the
/// implementor's responsibility, not the engine's.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the outbound neighbors of `page`.
    async fn fetch(&self, page: &PageId) -> Result<Vec<PageId>, FetchError>;
}

/// A `Fetcher` backed by a fixed in-memory table.
///
/// Pages absent from the table fail to fetch. Useful as a test fixture
/// and for crawling pre-resolved link graphs.
///
/// ```rust,ignore
/// let fetcher = StaticFetcher::new()
///     .with_page("a", ["b", "c"])
///     .with_page("b", [])
///     .with_page("c", ["a"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct StaticFetcher {
    pages: HashMap<PageId, Vec<PageId>>,
}

impl StaticFetcher {
    /// Creates an empty fetch table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page and its outbound neighbors to the table.
    pub fn with_page<P, N, I>(mut self, page: P, neighbors: N) -> Self
    where
        P: Into<PageId>,
        N: IntoIterator<Item = I>,
        I: Into<PageId>,
    {
        self.pages.insert(
            page.into(),
            neighbors.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Returns the number of pages in the table.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Checks whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, page: &PageId) -> Result<Vec<PageId>, FetchError> {
        match self.pages.get(page) {
            Some(neighbors) => {
                trace!("found: {}", page);
                Ok(neighbors.clone())
            }
            None => {
                trace!("missing: {}", page);
                Err(FetchError::new(page.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_id_conversions() {
        let a = PageId::from("http://golang.org/");
        let b = PageId::from(String::from("http://golang.org/"));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "http://golang.org/");
        assert_eq!(format!("{}", a), "http://golang.org/");
    }

    #[tokio::test]
    async fn static_fetcher_returns_neighbors() {
        let fetcher = StaticFetcher::new().with_page("a", ["b", "c"]);
        let neighbors = fetcher.fetch(&"a".into()).await.unwrap();
        assert_eq!(neighbors, vec![PageId::from("b"), PageId::from("c")]);
    }

    #[tokio::test]
    async fn static_fetcher_fails_unknown_pages() {
        let fetcher = StaticFetcher::new().with_page("a", ["b"]);
        let err = fetcher.fetch(&"b".into()).await.unwrap_err();
        assert_eq!(err.page, PageId::from("b"));
    }
}
