/// Trending Ordering
///
/// Pure top-K selection by quality signals:
/// rating (desc) → review count (desc) → product id (asc).
///
/// No threshold and no backfill. The catalog is expected to have removed
/// out-of-stock products already.
use crate::error::Result;
use crate::models::Item;
use crate::services::ranking::requested_limit;
use std::cmp::Ordering;
use tracing::info;

/// Default number of trending products returned
pub const DEFAULT_TRENDING_LIMIT: i64 = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct TrendingRanker;

impl TrendingRanker {
    pub fn new() -> Self {
        Self
    }

    /// Select the top `requested_count` products by rating and review count
    pub fn rank(&self, candidates: &[Item], requested_count: i64) -> Result<Vec<Item>> {
        let limit = requested_limit(requested_count)?;

        let mut ranked: Vec<Item> = candidates.to_vec();
        ranked.sort_by(Self::compare);
        ranked.truncate(limit);

        info!(
            input_count = candidates.len(),
            output_count = ranked.len(),
            "Trending ranking completed"
        );

        Ok(ranked)
    }

    fn compare(a: &Item, b: &Item) -> Ordering {
        b.rating
            .total_cmp(&a.rating)
            .then_with(|| b.num_reviews.cmp(&a.num_reviews))
            .then_with(|| a.id.cmp(&b.id))
    }
}

/// Trending products with the default ranker
pub fn trending(candidates: &[Item], requested_count: i64) -> Result<Vec<Item>> {
    TrendingRanker::new().rank(candidates, requested_count)
}
