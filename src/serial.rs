//! Single-threaded reference engine.
//!
//! A depth-first traversal over the same `Fetcher` and `VisitedSet`
//! semantics as the concurrent engine, with no spawned tasks. Its only
//! job is to compute the expected visited set for a graph so tests can
//! compare the concurrent engine's result against it. Not a production
//! path.

use crate::fetcher::{Fetcher, PageId};
use crate::visited::VisitedSet;
use std::collections::HashSet;
use tracing::trace;

/// Visits every page reachable from `root`, depth first, one fetch at a
/// time. Fetch failures contribute zero neighbors, as in the concurrent
/// engine.
pub async fn crawl_serial<F: Fetcher>(root: impl Into<PageId>, fetcher: &F) -> HashSet<PageId> {
    let visited = VisitedSet::new();
    let mut stack = vec![root.into()];

    while let Some(page) = stack.pop() {
        if !visited.insert(&page) {
            continue;
        }
        trace!("serial visit: {}", page);
        match fetcher.fetch(&page).await {
            Ok(neighbors) => {
                for neighbor in neighbors.into_iter().rev() {
                    if !visited.contains(&neighbor) {
                        stack.push(neighbor);
                    }
                }
            }
            Err(_) => continue,
        }
    }

    visited.into_pages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::StaticFetcher;

    fn golang_table() -> StaticFetcher {
        StaticFetcher::new()
            .with_page(
                "http://golang.org/",
                ["http://golang.org/pkg/", "http://golang.org/cmd/"],
            )
            .with_page(
                "http://golang.org/pkg/",
                [
                    "http://golang.org/",
                    "http://golang.org/cmd/",
                    "http://golang.org/pkg/fmt/",
                    "http://golang.org/pkg/os/",
                ],
            )
            .with_page(
                "http://golang.org/pkg/fmt/",
                ["http://golang.org/", "http://golang.org/pkg/"],
            )
            .with_page(
                "http://golang.org/pkg/os/",
                ["http://golang.org/", "http://golang.org/pkg/"],
            )
    }

    #[tokio::test]
    async fn visits_everything_reachable_once() {
        let visited = crawl_serial("http://golang.org/", &golang_table()).await;
        let expected: HashSet<PageId> = [
            "http://golang.org/",
            "http://golang.org/pkg/",
            "http://golang.org/cmd/",
            "http://golang.org/pkg/fmt/",
            "http://golang.org/pkg/os/",
        ]
        .into_iter()
        .map(PageId::from)
        .collect();
        assert_eq!(visited, expected);
    }

    #[tokio::test]
    async fn cycles_terminate() {
        let fetcher = StaticFetcher::new()
            .with_page("a", ["b"])
            .with_page("b", ["a"]);
        let visited = crawl_serial("a", &fetcher).await;
        assert_eq!(visited.len(), 2);
    }

    #[tokio::test]
    async fn failing_root_still_counts_as_visited() {
        let visited = crawl_serial("nowhere", &StaticFetcher::new()).await;
        assert_eq!(visited, HashSet::from([PageId::from("nowhere")]));
    }
}
