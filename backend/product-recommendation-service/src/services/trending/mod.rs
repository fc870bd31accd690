pub mod algorithm;

pub use algorithm::{trending, TrendingRanker, DEFAULT_TRENDING_LIMIT};
