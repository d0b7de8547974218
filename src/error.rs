//! Error types for the crawl engine.
//!
//! The core recognizes exactly one error kind: a fetch that failed for a
//! page. Fetch failures are local to the task that hit them; the engine
//! treats the page as having no discoverable neighbors and the crawl
//! continues. Claim and counting operations never fail.

use crate::fetcher::PageId;
use thiserror::Error;

/// A fetch failed for a page.
///
/// Raised by [`Fetcher`](crate::fetcher::Fetcher) implementations. The
/// engine absorbs it (the page contributes zero neighbors); it never
/// propagates out of a crawl.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fetch failed for {page}")]
pub struct FetchError {
    /// The page whose fetch failed.
    pub page: PageId,
}

impl FetchError {
    /// Creates a `FetchError` for the given page.
    pub fn new(page: impl Into<PageId>) -> Self {
        FetchError { page: page.into() }
    }
}
