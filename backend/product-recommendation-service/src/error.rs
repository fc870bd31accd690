use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendationError>;

#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl RecommendationError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        RecommendationError::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        RecommendationError::NotFound(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RecommendationError::NotFound(_))
    }
}

// Implement conversions from other error types
impl From<serde_json::Error> for RecommendationError {
    fn from(err: serde_json::Error) -> Self {
        RecommendationError::Catalog(format!("Malformed catalog data: {}", err))
    }
}

impl From<std::io::Error> for RecommendationError {
    fn from(err: std::io::Error) -> Self {
        RecommendationError::Catalog(err.to_string())
    }
}

impl From<envy::Error> for RecommendationError {
    fn from(err: envy::Error) -> Self {
        RecommendationError::InvalidArgument(format!("Invalid configuration: {}", err))
    }
}
