//! A "prelude" for users of the `crawl-core` crate.
//!
//! This prelude re-exports the most commonly used traits and structs so
//! that they can be easily imported.
//!
//! # Example
//!
//! ```
//! use crawl_core::prelude::*;
//! ```

pub use crate::{
    // Core structs
    CrawlOutcome,
    Crawler,
    PageId,
    StaticFetcher,
    // Core traits
    Fetcher,
    // Errors
    FetchError,
    // Essential re-export for trait implementation
    async_trait,
};
