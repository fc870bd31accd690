//! Recommendation engine services
//!
//! Pipeline: Catalog → Similarity → Scoring → Ranking (+ backfill)
//! Trending ordering reads the catalog directly.

pub mod catalog;
pub mod ranking;
pub mod recommendation;
pub mod scoring;
pub mod similarity;
pub mod trending;

pub use catalog::{CatalogGateway, InMemoryCatalog};
pub use ranking::{recommend, RankerConfig, RecommendationRanker};
pub use recommendation::RecommendationService;
pub use scoring::ScoringWeights;
pub use trending::{trending, TrendingRanker};
