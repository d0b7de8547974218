//! # crawl-core
//!
//! Concurrent graph crawl engine: explores a directed graph of pages,
//! visits each distinct page at most once, and terminates exactly when
//! no work remains, even though work is discovered dynamically and
//! fetch latencies are unpredictable.
//!
//! Provides the main components: `Crawler`, the `Fetcher` trait,
//! `VisitedSet`, and the in-flight task accounting behind termination
//! detection.
//!
//! ## Example
//!
//! ```rust,ignore
//! use crawl_core::{Crawler, StaticFetcher};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = StaticFetcher::new()
//!         .with_page("http://golang.org/", ["http://golang.org/pkg/"])
//!         .with_page("http://golang.org/pkg/", ["http://golang.org/"]);
//!
//!     let outcome = Crawler::new(fetcher).crawl("http://golang.org/").await;
//!     println!("{}", outcome.stats);
//! }
//! ```
//!
//! A `Fetcher` can be anything: an HTTP client, a filesystem walker, a
//! canned table. The engine's guarantees (exactly-once visits, finite
//! termination on finite graphs, failure isolation) hold for all of
//! them.

pub mod engine;
pub mod error;
pub mod fetcher;
pub mod prelude;
pub mod serial;
pub mod state;
pub mod stats;
pub mod visited;

pub use engine::{CrawlOutcome, Crawler};
pub use error::FetchError;
pub use fetcher::{Fetcher, PageId, StaticFetcher};
pub use serial::crawl_serial;
pub use state::InFlight;
pub use stats::{CrawlStats, StatsSnapshot};
pub use visited::VisitedSet;

pub use async_trait::async_trait;
pub use tokio;
