use crate::error::{RecommendationError, Result};
use crate::services::ranking::{RankerConfig, DEFAULT_THRESHOLD};
use crate::services::scoring::ScoringWeights;
use crate::services::trending::DEFAULT_TRENDING_LIMIT;
use serde::Deserialize;

const RECOMMENDATION_PREFIX: &str = "RECOMMENDATION_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub recommendation: RecommendationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_tag_weight")]
    pub tag_weight: f64,
    #[serde(default = "default_category_weight")]
    pub category_weight: f64,
    #[serde(default = "default_price_weight")]
    pub price_weight: f64,
    #[serde(default = "default_category_boost_raw")]
    pub category_boost_raw: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_limit")]
    pub default_limit: i64,
    #[serde(default = "default_trending_limit")]
    pub trending_limit: i64,
}

fn default_service_name() -> String {
    "product-recommendation-service".to_string()
}

fn default_catalog_path() -> String {
    "data/catalog.json".to_string()
}

fn default_tag_weight() -> f64 {
    ScoringWeights::default().tag_weight
}

fn default_category_weight() -> f64 {
    ScoringWeights::default().category_weight
}

fn default_price_weight() -> f64 {
    ScoringWeights::default().price_weight
}

fn default_category_boost_raw() -> f64 {
    ScoringWeights::default().category_boost_raw
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_limit() -> i64 {
    6
}

fn default_trending_limit() -> i64 {
    DEFAULT_TRENDING_LIMIT
}

impl RecommendationConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            tag_weight: self.tag_weight,
            category_weight: self.category_weight,
            price_weight: self.price_weight,
            category_boost_raw: self.category_boost_raw,
        }
    }

    pub fn ranker_config(&self) -> RankerConfig {
        RankerConfig {
            weights: self.weights(),
            threshold: self.threshold,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.ranker_config().validate()?;

        if self.default_limit <= 0 {
            return Err(RecommendationError::invalid_argument(format!(
                "RECOMMENDATION_DEFAULT_LIMIT must be positive, got {}",
                self.default_limit
            )));
        }

        if self.trending_limit <= 0 {
            return Err(RecommendationError::invalid_argument(format!(
                "RECOMMENDATION_TRENDING_LIMIT must be positive, got {}",
                self.trending_limit
            )));
        }

        Ok(())
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            service: envy::from_env::<ServiceConfig>()?,
            recommendation: envy::prefixed(RECOMMENDATION_PREFIX)
                .from_env::<RecommendationConfig>()?,
        };
        config.recommendation.validate()?;

        Ok(config)
    }

    /// Build from explicit key/value pairs instead of the process environment
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)> + Clone,
    {
        let config = Config {
            service: envy::from_iter::<_, ServiceConfig>(vars.clone())?,
            recommendation: envy::prefixed(RECOMMENDATION_PREFIX)
                .from_iter::<_, RecommendationConfig>(vars)?,
        };
        config.recommendation.validate()?;

        Ok(config)
    }
}
