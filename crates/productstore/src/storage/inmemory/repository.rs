//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use productstore_core::product::Product;
use productstore_core::storage::{ProductRepository, Result};

/// In-memory storage backend for testing and local experiments.
///
/// Mirrors the DynamoDB backend's semantics: creates replace unconditionally,
/// updates upsert the named fields, deletes are idempotent, and the category
/// filter is substring containment. Data is lost when the repository drops.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    products: Arc<RwLock<HashMap<String, Product>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryRepository {
    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn get_all_products(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn get_products_by_category(&self, id: &str, category: &str) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .get(id)
            .filter(|product| {
                product
                    .fields
                    .get("category")
                    .and_then(Value::as_str)
                    .is_some_and(|value| value.contains(category))
            })
            .cloned()
            .map(|product| vec![product])
            .unwrap_or_default())
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        products.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn update_product(&self, id: &str, fields: &Map<String, Value>) -> Result<()> {
        let mut products = self.products.write().await;
        let record = products.entry(id.to_string()).or_insert_with(|| Product {
            id: id.to_string(),
            fields: Map::new(),
        });

        for (key, value) in fields {
            // The partition key is immutable.
            if key != "id" {
                record.fields.insert(key.clone(), value.clone());
            }
        }

        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        let mut products = self.products.write().await;
        products.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_product(id: &str) -> Product {
        Product::from_value(json!({
            "id": id,
            "name": "Hammer",
            "category": "hand tools",
            "price": 9.99
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_none() {
        let repository = InMemoryRepository::new();

        assert_eq!(repository.get_product("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_replaces_existing_record() {
        let repository = InMemoryRepository::new();
        repository.create_product(&sample_product("p-1")).await.unwrap();

        let replacement = Product::from_value(json!({"id": "p-1", "name": "Mallet"})).unwrap();
        repository.create_product(&replacement).await.unwrap();

        let stored = repository.get_product("p-1").await.unwrap().unwrap();
        assert_eq!(stored.fields["name"], json!("Mallet"));
        assert!(!stored.fields.contains_key("price"));
    }

    #[tokio::test]
    async fn test_update_upserts_missing_record() {
        let repository = InMemoryRepository::new();

        let mut fields = Map::new();
        fields.insert("stock".to_string(), json!(5));
        repository.update_product("p-9", &fields).await.unwrap();

        let stored = repository.get_product("p-9").await.unwrap().unwrap();
        assert_eq!(stored.id, "p-9");
        assert_eq!(stored.fields["stock"], json!(5));
    }

    #[tokio::test]
    async fn test_update_never_clobbers_the_id() {
        let repository = InMemoryRepository::new();
        repository.create_product(&sample_product("p-1")).await.unwrap();

        let mut fields = Map::new();
        fields.insert("id".to_string(), json!("other"));
        fields.insert("name".to_string(), json!("Mallet"));
        repository.update_product("p-1", &fields).await.unwrap();

        let stored = repository.get_product("p-1").await.unwrap().unwrap();
        assert_eq!(stored.id, "p-1");
        assert_eq!(stored.fields["name"], json!("Mallet"));
        assert!(!stored.fields.contains_key("id"));
    }

    #[tokio::test]
    async fn test_category_filter_matches_substring() {
        let repository = InMemoryRepository::new();
        repository.create_product(&sample_product("p-1")).await.unwrap();

        let hits = repository.get_products_by_category("p-1", "tool").await.unwrap();
        assert_eq!(hits.len(), 1);

        let misses = repository.get_products_by_category("p-1", "garden").await.unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    async fn test_category_filter_without_category_field_matches_nothing() {
        let repository = InMemoryRepository::new();
        let product = Product::from_value(json!({"id": "p-2", "name": "Nail"})).unwrap();
        repository.create_product(&product).await.unwrap();

        let hits = repository.get_products_by_category("p-2", "tool").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let repository = InMemoryRepository::new();

        repository.delete_product("absent").await.unwrap();
        repository.delete_product("absent").await.unwrap();
    }
}
