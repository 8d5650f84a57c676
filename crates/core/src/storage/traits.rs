use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::product::Product;

use super::Result;

/// Repository for product operations over a single table keyed by `id`.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Gets a product by its id. Absence is `Ok(None)`, not an error.
    async fn get_product(&self, id: &str) -> Result<Option<Product>>;

    /// Gets every product in the table.
    ///
    /// Implementations must keep reading until the store signals exhaustion;
    /// callers receive the complete table, never a single page.
    async fn get_all_products(&self) -> Result<Vec<Product>>;

    /// Gets products matching an exact id whose `category` field contains
    /// the given substring.
    async fn get_products_by_category(&self, id: &str, category: &str) -> Result<Vec<Product>>;

    /// Writes a product unconditionally, replacing any existing record
    /// with the same id.
    async fn create_product(&self, product: &Product) -> Result<()>;

    /// Sets the named fields on the record with the given id, leaving all
    /// other fields untouched. Callers must not pass an empty field map.
    async fn update_product(&self, id: &str, fields: &Map<String, Value>) -> Result<()>;

    /// Deletes a product by id. Deleting a missing id succeeds.
    async fn delete_product(&self, id: &str) -> Result<()>;
}
