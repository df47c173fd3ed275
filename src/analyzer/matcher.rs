use crate::analyzer::gates::passes_all;
use crate::analyzer::index::ProductIndex;
use crate::config::{MatchPolicy, MatchingConfig};
use crate::model::{ListingId, ListingView, MatchError};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Listing ids grouped by product, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    groups: Vec<Vec<ListingId>>,
}

impl MatchResult {
    pub fn with_products(count: usize) -> Self {
        Self {
            groups: vec![Vec::new(); count],
        }
    }

    /// Records that `listing` belongs to the product at `position`.
    pub fn push(&mut self, position: usize, listing: ListingId) {
        self.groups[position].push(listing);
    }

    pub fn group(&self, position: usize) -> &[ListingId] {
        self.groups.get(position).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn groups(&self) -> &[Vec<ListingId>] {
        &self.groups
    }

    /// Total number of (listing, product) assignments.
    pub fn assignments(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

/// Trait defining the interface for a listing matcher.
pub trait Matcher {
    /// Catalog positions of the products `listing` is assigned to.
    fn match_listing(&self, index: &ProductIndex, listing: &ListingView) -> Vec<usize>;

    /// Evaluates every listing against every product, marking matched views.
    fn match_all(&self, index: &ProductIndex, listings: &mut [ListingView]) -> MatchResult {
        let mut result = MatchResult::with_products(index.len());
        for listing in listings.iter_mut() {
            let positions = self.match_listing(index, listing);
            if !positions.is_empty() {
                listing.matched = true;
            }
            for position in positions {
                result.push(position, listing.id);
            }
        }
        result
    }
}

/// Gate-based matcher with a configurable slack and multiplicity policy.
#[derive(Debug, Clone, Copy)]
pub struct MatcherImpl {
    pub token_slack: usize,
    pub policy: MatchPolicy,
}

impl MatcherImpl {
    pub fn new(token_slack: usize, policy: MatchPolicy) -> Self {
        Self { token_slack, policy }
    }

    pub fn from_config(cfg: &MatchingConfig) -> Self {
        Self::new(cfg.token_slack, cfg.policy)
    }
}

impl Default for MatcherImpl {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}

impl Matcher for MatcherImpl {
    fn match_listing(&self, index: &ProductIndex, listing: &ListingView) -> Vec<usize> {
        let passes = |position: &usize| {
            index
                .get(*position)
                .is_some_and(|product| passes_all(product, listing, self.token_slack))
        };
        let mut positions = 0..index.len();
        match self.policy {
            MatchPolicy::All => positions.filter(passes).collect(),
            MatchPolicy::First => positions.find(passes).into_iter().collect(),
            MatchPolicy::Last => positions.rev().find(passes).into_iter().collect(),
        }
    }
}

impl MatcherImpl {
    /// Runs `match_all` over `workers` chunks of listings on the blocking pool.
    ///
    /// Chunks are contiguous and reassembled in listing order, so the result
    /// is identical to a sequential run.
    pub async fn match_all_parallel(
        &self,
        index: Arc<ProductIndex>,
        listings: Vec<ListingView>,
        workers: usize,
    ) -> Result<(Vec<ListingView>, MatchResult), MatchError> {
        let workers = workers.max(1);
        let chunk_size = listings.len().div_ceil(workers).max(1);
        info!(
            "Matching {} listings on {} workers ({} per chunk)",
            listings.len(),
            workers,
            chunk_size
        );

        let mut chunks = Vec::new();
        let mut remaining = listings.into_iter().peekable();
        while remaining.peek().is_some() {
            chunks.push(remaining.by_ref().take(chunk_size).collect::<Vec<_>>());
        }

        let tasks = chunks.into_iter().enumerate().map(|(n, mut chunk)| {
            let matcher = *self;
            let index = Arc::clone(&index);
            tokio::task::spawn_blocking(move || {
                let partial = matcher.match_all(&index, &mut chunk);
                debug!(chunk = n, assignments = partial.assignments(), "Chunk matched");
                (chunk, partial)
            })
        });

        let mut views = Vec::new();
        let mut result = MatchResult::with_products(index.len());
        for joined in join_all(tasks).await {
            let (chunk, partial) = joined?;
            for (position, group) in partial.groups.into_iter().enumerate() {
                result.groups[position].extend(group);
            }
            views.extend(chunk);
        }
        Ok((views, result))
    }
}

/// Listings never marked matched, in input order. Diagnostic only.
pub fn unmatched_listings(listings: &[ListingView]) -> Vec<&ListingView> {
    listings.iter().filter(|l| !l.matched).collect()
}
