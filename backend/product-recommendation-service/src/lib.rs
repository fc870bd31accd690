pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{RecommendationError, Result};
pub use models::{Category, Item, ScoredItem};
pub use services::{
    recommend, trending, CatalogGateway, InMemoryCatalog, RankerConfig, RecommendationRanker,
    RecommendationService, ScoringWeights, TrendingRanker,
};
