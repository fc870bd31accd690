use super::catalog::CatalogGateway;
use super::ranking::{RankerConfig, RecommendationRanker};
use super::trending::TrendingRanker;
use crate::error::Result;
use crate::models::{Item, RecommendationRequest, RecommendationResponse, TargetSummary};
use std::sync::Arc;
use tracing::info;

/// Recommendation Service
///
/// Resolves products through the catalog gateway and runs the rankers.
/// Stateless apart from its configuration; share it behind `Arc`.
pub struct RecommendationService {
    catalog: Arc<dyn CatalogGateway>,
    ranker: RecommendationRanker,
    trending_ranker: TrendingRanker,
    default_limit: i64,
    trending_limit: i64,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<dyn CatalogGateway>,
        ranker_config: RankerConfig,
        default_limit: i64,
        trending_limit: i64,
    ) -> Result<Self> {
        Ok(Self {
            catalog,
            ranker: RecommendationRanker::new(ranker_config)?,
            trending_ranker: TrendingRanker::new(),
            default_limit,
            trending_limit,
        })
    }

    pub fn default_limit(&self) -> i64 {
        self.default_limit
    }

    pub fn trending_limit(&self) -> i64 {
        self.trending_limit
    }

    /// Similar products for a target, using request overrides when present
    pub async fn recommend(&self, request: &RecommendationRequest) -> Result<RecommendationResponse> {
        let target = self.catalog.find_item(&request.target_id).await?;
        let candidates = self.catalog.similar_candidates(&target.id).await?;

        let items = match (request.weights, request.threshold) {
            (None, None) => self
                .ranker
                .rank(&target, &candidates, request.requested_count)?,
            (weights, threshold) => {
                let base = self.ranker.config();
                let config = RankerConfig {
                    weights: weights.unwrap_or(base.weights),
                    threshold: threshold.unwrap_or(base.threshold),
                };
                RecommendationRanker::new(config)?.rank(
                    &target,
                    &candidates,
                    request.requested_count,
                )?
            }
        };

        info!(
            target_id = %target.id,
            candidate_count = candidates.len(),
            result_count = items.len(),
            "Recommendations generated"
        );

        Ok(RecommendationResponse {
            target: TargetSummary::from(&target),
            count: items.len(),
            items,
        })
    }

    /// Similar products with the configured default limit
    pub async fn recommend_for(&self, target_id: &str) -> Result<RecommendationResponse> {
        self.recommend(&RecommendationRequest::new(target_id, self.default_limit))
            .await
    }

    /// Top-rated in-stock products
    pub async fn trending(&self, limit: Option<i64>) -> Result<Vec<Item>> {
        let candidates = self.catalog.in_stock_items().await?;
        self.trending_ranker
            .rank(&candidates, limit.unwrap_or(self.trending_limit))
    }
}
