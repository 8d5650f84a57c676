//! DynamoDB repository implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_json::{Map, Value};

use productstore_core::product::Product;
use productstore_core::storage::{ProductRepository, Result};

use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_scan_error, map_update_item_error,
};
use super::expressions::build_set_expression;
use super::marshal::{item_to_product, product_to_item};

/// DynamoDB-based repository over the single products table.
///
/// The client is created once per process and shared across invocations;
/// the repository itself holds no mutable state.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ProductRepository for DynamoDbRepository {
    async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_product(&item)?)),
            None => Ok(None),
        }
    }

    async fn get_all_products(&self) -> Result<Vec<Product>> {
        let mut products = Vec::new();
        let mut exclusive_start_key = None;

        // A scan returns at most 1 MB per page; follow the continuation key
        // until the engine signals exhaustion.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items() {
                products.push(item_to_product(item)?);
            }

            match result.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        Ok(products)
    }

    async fn get_products_by_category(&self, id: &str, category: &str) -> Result<Vec<Product>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("id = :productId")
            .filter_expression("contains (category, :category)")
            .expression_attribute_values(":productId", AttributeValue::S(id.to_string()))
            .expression_attribute_values(":category", AttributeValue::S(category.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        result.items().iter().map(item_to_product).collect()
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        // Unconditional put: the freshly generated id makes a key collision
        // astronomically unlikely, so no attribute_not_exists guard.
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(product_to_item(product)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn update_product(&self, id: &str, fields: &Map<String, Value>) -> Result<()> {
        let update = build_set_expression(fields);

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .update_expression(update.expression)
            .set_expression_attribute_names(Some(update.names))
            .set_expression_attribute_values(Some(update.values))
            .send()
            .await
            .map_err(map_update_item_error)?;

        Ok(())
    }

    async fn delete_product(&self, id: &str) -> Result<()> {
        // No attribute_exists condition: deleting a missing key succeeds.
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
