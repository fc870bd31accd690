// ============================================
// Content-Based Ranker (内容相似度排序)
// ============================================
//
// Input: target product + in-stock candidates (target excluded by the catalog)
// Output: up to `requested_count` scored candidates, best first
//
// Candidates below the threshold only re-enter the result through
// same-category backfill, keeping their computed score.

use super::{by_score_then_id, requested_limit};
use crate::error::{RecommendationError, Result};
use crate::models::{Item, ScoredItem};
use crate::services::scoring::ScoringWeights;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Minimum combined score to qualify without backfill
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Ranker parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankerConfig {
    pub weights: ScoringWeights,
    pub threshold: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl RankerConfig {
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;

        if !self.threshold.is_finite() {
            return Err(RecommendationError::invalid_argument(format!(
                "Threshold must be finite, got {}",
                self.threshold
            )));
        }

        Ok(())
    }
}

/// Recommendation ranker
#[derive(Default)]
pub struct RecommendationRanker {
    config: RankerConfig,
}

impl RecommendationRanker {
    /// Create ranker with validated configuration
    pub fn new(config: RankerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Set minimum score threshold
    pub fn with_min_threshold(self, threshold: f64) -> Result<Self> {
        Self::new(RankerConfig {
            threshold,
            ..self.config
        })
    }

    pub fn config(&self) -> &RankerConfig {
        &self.config
    }

    /// Rank candidates against the target
    pub fn rank(
        &self,
        target: &Item,
        candidates: &[Item],
        requested_count: i64,
    ) -> Result<Vec<ScoredItem>> {
        let limit = requested_limit(requested_count)?;

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let scored = self.score_candidates(target, candidates);
        let input_count = scored.len();

        let (mut qualified, below): (Vec<ScoredItem>, Vec<ScoredItem>) = scored
            .into_iter()
            .partition(|c| c.score >= self.config.threshold);

        qualified.sort_by(by_score_then_id);
        qualified.truncate(limit);
        let qualified_count = qualified.len();

        if qualified.len() < limit {
            let mut backfill: Vec<ScoredItem> = below
                .into_iter()
                .filter(|c| c.item.category == target.category)
                .collect();

            backfill.sort_by(by_score_then_id);
            backfill.truncate(limit - qualified.len());
            qualified.extend(backfill);
        }

        info!(
            target_id = %target.id,
            input_count = input_count,
            qualified_count = qualified_count,
            backfill_count = qualified.len() - qualified_count,
            output_count = qualified.len(),
            "Recommendation ranking completed"
        );

        Ok(qualified)
    }

    /// Score every distinct candidate, skipping the target itself
    fn score_candidates(&self, target: &Item, candidates: &[Item]) -> Vec<ScoredItem> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(candidates.len());

        candidates
            .iter()
            .filter(|candidate| {
                if candidate.id == target.id {
                    warn!(target_id = %target.id, "Target product found among candidates, skipping");
                    return false;
                }
                seen.insert(candidate.id.as_str())
            })
            .map(|candidate| {
                let breakdown = self.config.weights.score(target, candidate);
                let score = breakdown.total();

                debug!(
                    product_id = %candidate.id,
                    tag_similarity = breakdown.tag_similarity,
                    category_boost = breakdown.category_boost,
                    price_similarity = breakdown.price_similarity,
                    score = score,
                    "Similarity score computed"
                );

                ScoredItem {
                    item: candidate.clone(),
                    score,
                    breakdown,
                }
            })
            .collect()
    }
}

/// Rank candidates with optional weight and threshold overrides
pub fn recommend(
    target: &Item,
    candidates: &[Item],
    requested_count: i64,
    weights: Option<ScoringWeights>,
    threshold: Option<f64>,
) -> Result<Vec<ScoredItem>> {
    let config = RankerConfig {
        weights: weights.unwrap_or_default(),
        threshold: threshold.unwrap_or(DEFAULT_THRESHOLD),
    };

    RecommendationRanker::new(config)?.rank(target, candidates, requested_count)
}
