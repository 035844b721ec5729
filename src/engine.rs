// src/engine.rs

//! Scoped crawl engine.
//!
//! Owns the visited set and the text index, and traverses every reachable
//! page whose URL stays within the scope root. Traversal is an explicit
//! work-list rather than recursion, so call-stack depth stays constant no
//! matter how deep a link chain runs; the visited set is the sole
//! cycle-breaking and deduplication mechanism.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::fetch::Fetcher;
use crate::index::{self, TextIndex};
use crate::page;
use crate::utils;

/// Summary of a single crawl invocation.
///
/// All traversal effects are observable through the engine's visited set
/// and index; this is reporting only.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlOutcome {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// URLs dispatched for fetch-and-process, success or failure.
    pub pages_visited: usize,
    /// Pages whose fetch and parse both succeeded.
    pub pages_indexed: usize,
    pub fetch_failures: usize,
    /// Links dropped because they could not be resolved to an absolute URL.
    pub skipped_links: usize,
}

/// Crawler that stays within a scope and indexes page text as it goes.
///
/// State persists across repeated [`crawl`](Self::crawl) calls, so one
/// engine can crawl incrementally from multiple seeds and answer
/// [`search`](Self::search) queries over everything indexed so far.
pub struct CrawlEngine<F: Fetcher> {
    fetcher: F,
    visited: HashSet<String>,
    index: TextIndex,
}

impl<F: Fetcher> CrawlEngine<F> {
    /// Create an engine with an empty visited set and index.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            visited: HashSet::new(),
            index: TextIndex::new(),
        }
    }

    /// Crawl from `seed`, following links whose resolved URL starts with
    /// the scope root. `scope_root` defaults to the seed and is fixed for
    /// the whole invocation: links on every page are resolved against it,
    /// not against the page they appear on.
    ///
    /// A URL is marked visited before any network I/O, so a failing fetch
    /// cannot be retried via another link to the same URL. Fetch failures
    /// are isolated to their own URL: they are counted, reported through
    /// the log, and the rest of the work-list proceeds.
    pub async fn crawl(&mut self, seed: &str, scope_root: Option<&str>) -> CrawlOutcome {
        let started_at = Utc::now();
        let scope = scope_root.unwrap_or(seed).to_string();

        // Links can only be resolved against an absolute scope root. The
        // seed itself is still fetched either way.
        let base = match Url::parse(&scope) {
            Ok(base) => Some(base),
            Err(e) => {
                log::warn!("Scope root {scope:?} is not an absolute URL, links will not be followed: {e}");
                None
            }
        };

        let mut pages_visited = 0;
        let mut pages_indexed = 0;
        let mut fetch_failures = 0;
        let mut skipped_links = 0;

        let mut frontier = vec![seed.to_string()];
        while let Some(url) = frontier.pop() {
            if !self.visited.insert(url.clone()) {
                continue;
            }
            pages_visited += 1;

            let body = match self.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    fetch_failures += 1;
                    log::warn!("Failed to fetch {url}: {e}");
                    continue;
                }
            };

            let page = page::parse(&body);
            self.index.put(&url, page.text);
            pages_indexed += 1;

            let Some(base) = &base else { continue };

            // Reverse push keeps depth-first processing in document order.
            for href in page.links.iter().rev() {
                if href.is_empty() {
                    continue;
                }
                match utils::resolve_url(base, href) {
                    Ok(resolved) => {
                        if utils::in_scope(&resolved, &scope) && !self.visited.contains(&resolved) {
                            frontier.push(resolved);
                        }
                    }
                    Err(e) => {
                        skipped_links += 1;
                        log::debug!("Skipping link {href:?} on {url}: {e}");
                    }
                }
            }
        }

        CrawlOutcome {
            started_at,
            finished_at: Utc::now(),
            pages_visited,
            pages_indexed,
            fetch_failures,
            skipped_links,
        }
    }

    /// Return the URLs of indexed pages whose text contains `keyword`,
    /// ignoring case, in index insertion order.
    ///
    /// An empty keyword matches every indexed page.
    pub fn search(&self, keyword: &str) -> Vec<&str> {
        self.index
            .entries()
            .filter(|(_, text)| index::contains_keyword(text, keyword))
            .map(|(url, _)| url)
            .collect()
    }

    /// URLs already dispatched for processing, success or failure.
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// The text index populated so far.
    pub fn index(&self) -> &TextIndex {
        &self.index
    }

    /// Mutable access to the index, for callers that pre-populate entries.
    pub fn index_mut(&mut self) -> &mut TextIndex {
        &mut self.index
    }
}
