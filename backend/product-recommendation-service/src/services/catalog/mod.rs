use crate::error::{RecommendationError, Result};
use crate::models::Item;
use async_trait::async_trait;
use dashmap::DashMap;
use std::path::Path;
use tracing::{debug, info};

/// Catalog gateway - supplies the target product and candidate sets
///
/// Candidate sets never contain out-of-stock products; the similar-candidate
/// set never contains the target itself.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Resolve a product by id, `NotFound` when absent
    async fn find_item(&self, id: &str) -> Result<Item>;

    /// In-stock products other than `target_id`
    async fn similar_candidates(&self, target_id: &str) -> Result<Vec<Item>>;

    /// All in-stock products
    async fn in_stock_items(&self) -> Result<Vec<Item>>;
}

/// In-memory catalog backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: DashMap<String, Item>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, validating every product
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let catalog = Self::new();
        for item in items {
            catalog.insert(item)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of products
    pub fn from_json_str(json: &str) -> Result<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// Load a JSON array of products from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            RecommendationError::Catalog(format!(
                "Failed to read catalog {}: {}",
                path.display(),
                e
            ))
        })?;

        let catalog = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            product_count = catalog.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Insert or replace a product
    pub fn insert(&self, item: Item) -> Result<()> {
        item.validate()?;
        debug!(product_id = %item.id, "Catalog product upserted");
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    pub fn remove(&self, id: &str) -> Option<Item> {
        self.items.remove(id).map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn collect_in_stock(&self, exclude: Option<&str>) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .filter(|entry| entry.value().in_stock())
            .filter(|entry| exclude != Some(entry.key().as_str()))
            .map(|entry| entry.value().clone())
            .collect();

        // Map iteration order is arbitrary
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }
}

#[async_trait]
impl CatalogGateway for InMemoryCatalog {
    async fn find_item(&self, id: &str) -> Result<Item> {
        self.items
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RecommendationError::not_found(format!("Product not found: {}", id)))
    }

    async fn similar_candidates(&self, target_id: &str) -> Result<Vec<Item>> {
        Ok(self.collect_in_stock(Some(target_id)))
    }

    async fn in_stock_items(&self) -> Result<Vec<Item>> {
        Ok(self.collect_in_stock(None))
    }
}
