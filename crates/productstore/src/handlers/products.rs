//! Product CRUD operations.
//!
//! Handlers delegate to the repository trait and catch nothing: parsing and
//! storage errors propagate to the dispatcher boundary.

use productstore_core::product::Product;
use productstore_core::storage::ProductRepository;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::error::{HandlerError, Result};

/// Looks up a single product by id.
///
/// A missing record yields an empty object: absence is a valid outcome,
/// distinct from failure.
pub async fn get_product(repository: &dyn ProductRepository, id: &str) -> Result<Value> {
    let product = repository.get_product(id).await?;
    tracing::debug!(product_id = %id, found = product.is_some(), "Fetched product");

    Ok(match product {
        Some(product) => product.into_value(),
        None => json!({}),
    })
}

/// Retrieves every product in the table.
pub async fn get_all_products(repository: &dyn ProductRepository) -> Result<Value> {
    let products = repository.get_all_products().await?;
    tracing::debug!(count = products.len(), "Scanned products");

    Ok(Value::Array(
        products.into_iter().map(Product::into_value).collect(),
    ))
}

/// Retrieves products with the given id whose category contains the given
/// substring. Since `id` is the unique partition key this returns at most
/// one record in practice.
pub async fn get_products_by_category(
    repository: &dyn ProductRepository,
    id: &str,
    category: &str,
) -> Result<Value> {
    let products = repository.get_products_by_category(id, category).await?;
    tracing::debug!(product_id = %id, category = %category, count = products.len(), "Queried products");

    Ok(Value::Array(
        products.into_iter().map(Product::into_value).collect(),
    ))
}

/// Creates a product from the request payload.
///
/// The id is generated server-side; any client-supplied id is overwritten.
/// The write is unconditional.
pub async fn create_product(repository: &dyn ProductRepository, body: &str) -> Result<Value> {
    let fields = parse_object(body)?;
    let product = Product::new(Uuid::new_v4().to_string(), fields)
        .map_err(|e| HandlerError::MalformedRequest(e.to_string()))?;

    repository.create_product(&product).await?;
    tracing::info!(product_id = %product.id, "Created product");

    Ok(json!({ "id": product.id }))
}

/// Sets the payload's fields on the record with the given id, leaving
/// absent fields untouched. Fields can be replaced or added, not removed.
pub async fn update_product(
    repository: &dyn ProductRepository,
    id: &str,
    body: &str,
) -> Result<Value> {
    let fields = parse_object(body)?;
    // An empty field set would assemble an invalid update expression;
    // reject it before any storage call.
    if fields.is_empty() {
        return Err(HandlerError::EmptyUpdate);
    }

    repository.update_product(id, &fields).await?;
    tracing::info!(product_id = %id, fields = fields.len(), "Updated product");

    Ok(json!({}))
}

/// Deletes a product by id. Deleting a missing id succeeds.
pub async fn delete_product(repository: &dyn ProductRepository, id: &str) -> Result<Value> {
    repository.delete_product(id).await?;
    tracing::info!(product_id = %id, "Deleted product");

    Ok(json!({}))
}

fn parse_object(body: &str) -> Result<Map<String, Value>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| HandlerError::MalformedRequest(e.to_string()))?;
    match value {
        Value::Object(fields) => Ok(fields),
        _ => Err(HandlerError::MalformedRequest(
            "expected a JSON object".to_string(),
        )),
    }
}
