/// Ranking Module
///
/// Content-based ranking of catalog candidates against a target product.
///
/// # Workflow
/// 1. Score every candidate (tag Jaccard, category boost, price ratio)
/// 2. Keep candidates at or above the similarity threshold
/// 3. Sort by score descending, ties by product id
/// 4. Backfill with below-threshold candidates from the target's category
pub mod content_based;

pub use content_based::{recommend, RankerConfig, RecommendationRanker, DEFAULT_THRESHOLD};

use crate::error::{RecommendationError, Result};
use crate::models::ScoredItem;
use std::cmp::Ordering;

/// Convert a caller-supplied count into a positive limit
pub fn requested_limit(requested_count: i64) -> Result<usize> {
    if requested_count <= 0 {
        return Err(RecommendationError::invalid_argument(format!(
            "Requested count must be positive, got {}",
            requested_count
        )));
    }

    usize::try_from(requested_count).map_err(|_| {
        RecommendationError::invalid_argument(format!(
            "Requested count {} is out of range",
            requested_count
        ))
    })
}

/// Descending by score, ascending by id on ties
pub(crate) fn by_score_then_id(a: &ScoredItem, b: &ScoredItem) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.item.id.cmp(&b.item.id))
}
