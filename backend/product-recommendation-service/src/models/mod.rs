use crate::error::{RecommendationError, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of tags a product may carry
pub const MAX_TAGS: usize = 20;

/// Maximum product rating
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Clothing,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Books,
    Toys,
    #[serde(rename = "Health & Beauty")]
    HealthAndBeauty,
    Automotive,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::HomeAndGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Toys => "Toys",
            Category::HealthAndBeauty => "Health & Beauty",
            Category::Automotive => "Automotive",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog product as seen by the recommendation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub num_reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Item {
    /// Minimal constructor; optional display fields stay empty
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category,
            price,
            tags: Vec::new(),
            stock: 0,
            rating: 0.0,
            num_reviews: 0,
            image_url: None,
            featured: false,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_rating(mut self, rating: f64, num_reviews: u32) -> Self {
        self.rating = rating;
        self.num_reviews = num_reviews;
        self
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check catalog constraints before an item is admitted
    ///
    /// The tag limit counts the raw list, before case-insensitive duplicates collapse.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RecommendationError::invalid_argument(
                "Product id must not be empty",
            ));
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(RecommendationError::invalid_argument(format!(
                "Price must be a non-negative number, got {} for product {}",
                self.price, self.id
            )));
        }

        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(RecommendationError::invalid_argument(format!(
                "Rating must be in [0, {}], got {} for product {}",
                MAX_RATING, self.rating, self.id
            )));
        }

        if self.tags.len() > MAX_TAGS {
            return Err(RecommendationError::invalid_argument(format!(
                "A product cannot have more than {} tags, product {} has {}",
                MAX_TAGS,
                self.id,
                self.tags.len()
            )));
        }

        Ok(())
    }
}

/// Weighted contribution of each similarity signal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub tag_similarity: f64,
    pub category_boost: f64,
    pub price_similarity: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.tag_similarity + self.category_boost + self.price_similarity
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(rename = "similarityScore")]
    pub score: f64,
    pub breakdown: ScoreBreakdown,
}

impl ScoredItem {
    pub fn id(&self) -> &str {
        &self.item.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub target_id: String,
    pub requested_count: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<crate::services::ScoringWeights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl RecommendationRequest {
    pub fn new(target_id: impl Into<String>, requested_count: i64) -> Self {
        Self {
            target_id: target_id.into(),
            requested_count,
            weights: None,
            threshold: None,
        }
    }
}

/// Summary of the product recommendations were computed for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub tags: Vec<String>,
}

impl From<&Item> for TargetSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category,
            tags: item.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub target: TargetSummary,
    pub count: usize,
    pub items: Vec<ScoredItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_catalog_item() {
        let item = Item::new("p1", "Headphones", Category::Electronics, 199.99)
            .with_tags(["wireless", "bluetooth"])
            .with_rating(4.5, 120);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        let negative_price = Item::new("p1", "Broken", Category::Other, -1.0);
        assert!(negative_price.validate().is_err());

        let bad_rating = Item::new("p2", "Broken", Category::Other, 1.0).with_rating(5.5, 1);
        assert!(bad_rating.validate().is_err());

        let too_many_tags = Item::new("p3", "Broken", Category::Other, 1.0)
            .with_tags((0..=MAX_TAGS).map(|i| format!("tag{}", i)));
        assert!(matches!(
            too_many_tags.validate(),
            Err(RecommendationError::InvalidArgument(_))
        ));

        let blank_id = Item::new(" ", "Broken", Category::Other, 1.0);
        assert!(blank_id.validate().is_err());
    }

    #[test]
    fn test_validate_counts_raw_tags() {
        let variants = Item::new("p4", "Loud", Category::Other, 1.0)
            .with_tags((0..=MAX_TAGS).map(|i| if i % 2 == 0 { "sale" } else { "SALE" }));
        assert!(variants.validate().is_err());

        let at_limit = Item::new("p5", "Quiet", Category::Other, 1.0)
            .with_tags((0..MAX_TAGS).map(|i| format!("tag{}", i)));
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&Category::HomeAndGarden).unwrap();
        assert_eq!(json, "\"Home & Garden\"");

        let parsed: Category = serde_json::from_str("\"Health & Beauty\"").unwrap();
        assert_eq!(parsed, Category::HealthAndBeauty);
    }

    #[test]
    fn test_item_deserializes_catalog_document() {
        let json = r#"{
            "_id": "65a1",
            "name": "Trail Running Shoes",
            "category": "Sports",
            "price": 89.5,
            "tags": ["running", "outdoor"],
            "stock": 3,
            "rating": 4.2,
            "numReviews": 18
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "65a1");
        assert_eq!(item.category, Category::Sports);
        assert_eq!(item.num_reviews, 18);
        assert!(item.in_stock());
        assert!(!item.featured);
    }
}
