/// Score Combiner
///
/// Aggregates the three similarity signals into one score with configurable weights.
///
/// Formula:
///   score = tag_sim × tag_weight
///         + category_boost × (category_weight / category_boost_raw)
///         + price_sim (already capped at price_weight)
///
/// With the default weights the score lies in [0, 1].
use super::similarity::{category_boost, price_similarity, tag_similarity};
use crate::error::{RecommendationError, Result};
use crate::models::{Item, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// Scoring weights configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Max contribution of tag similarity
    /// Default: 0.6
    pub tag_weight: f64,

    /// Max contribution of a category match
    /// Default: 0.2
    pub category_weight: f64,

    /// Max contribution of price proximity
    /// Default: 0.2
    pub price_weight: f64,

    /// Raw category bonus before rescaling to `category_weight`
    /// Default: 0.3
    pub category_boost_raw: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tag_weight: 0.6,
            category_weight: 0.2,
            price_weight: 0.2,
            category_boost_raw: 0.3,
        }
    }
}

impl ScoringWeights {
    /// Sum of the maximum contributions
    pub fn max_score(&self) -> f64 {
        self.tag_weight + self.category_weight + self.price_weight
    }

    /// Multiplier applied to the raw category bonus
    pub fn category_scale(&self) -> f64 {
        self.category_weight / self.category_boost_raw
    }

    /// Validate weight parameters
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("tag_weight", self.tag_weight),
            ("category_weight", self.category_weight),
            ("price_weight", self.price_weight),
            ("category_boost_raw", self.category_boost_raw),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RecommendationError::invalid_argument(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        if self.category_boost_raw == 0.0 {
            return Err(RecommendationError::invalid_argument(
                "category_boost_raw must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Score a candidate against the target
    ///
    /// Assumes the weights have been validated.
    pub fn score(&self, target: &Item, candidate: &Item) -> ScoreBreakdown {
        let tag_sim = tag_similarity(&target.tags, &candidate.tags);
        let boost = category_boost(
            target.category,
            candidate.category,
            self.category_boost_raw,
        );
        let price_sim = price_similarity(target.price, candidate.price, self.price_weight);

        self.combine(tag_sim, boost, price_sim)
    }

    /// Weight raw signals into per-signal contributions
    pub fn combine(&self, tag_sim: f64, raw_category_boost: f64, price_sim: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            tag_similarity: tag_sim * self.tag_weight,
            category_boost: raw_category_boost * self.category_scale(),
            price_similarity: price_sim,
        }
    }
}
