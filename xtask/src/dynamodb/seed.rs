//! Seed command implementation.

use super::error::{DynamodbError, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use uuid::Uuid;

/// A sample product destined for the table.
#[derive(Debug, Clone)]
pub struct SeedProduct {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
}

/// Generate sample products with rotating names and categories.
pub fn generate_seed_products(count: u32) -> Vec<SeedProduct> {
    let names = [
        "Claw Hammer",
        "Cordless Drill",
        "Garden Trowel",
        "LED Work Light",
        "Socket Wrench Set",
        "Pruning Shears",
        "Safety Goggles",
        "Tape Measure",
        "Paint Roller",
        "Utility Knife",
    ];
    let categories = ["hand tools", "power tools", "garden", "lighting", "safety"];
    let prices = [9.99, 129.0, 14.5, 39.95, 54.25, 22.0, 7.8, 11.99, 6.49, 4.99];

    (0..count)
        .map(|index| {
            let i = index as usize;
            let name = names[i % names.len()];
            SeedProduct {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                category: categories[i % categories.len()].to_string(),
                price: prices[i % prices.len()],
                description: format!("Demo item #{}: {}", index + 1, name),
            }
        })
        .collect()
}

/// Convert a SeedProduct to a DynamoDB item.
fn product_to_item(product: &SeedProduct) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("id".to_string(), AttributeValue::S(product.id.clone()));
    item.insert("name".to_string(), AttributeValue::S(product.name.clone()));
    item.insert(
        "category".to_string(),
        AttributeValue::S(product.category.clone()),
    );
    item.insert(
        "price".to_string(),
        AttributeValue::N(product.price.to_string()),
    );
    item.insert(
        "description".to_string(),
        AttributeValue::S(product.description.clone()),
    );

    item
}

/// Insert products into DynamoDB.
pub async fn seed_products(
    client: &Client,
    table_name: &str,
    products: &[SeedProduct],
) -> Result<u32> {
    let mut inserted = 0;

    // Use batch write for efficiency (25 items per batch max)
    for chunk in products.chunks(25) {
        let write_requests: Vec<_> = chunk
            .iter()
            .map(|product| {
                aws_sdk_dynamodb::types::WriteRequest::builder()
                    .put_request(
                        aws_sdk_dynamodb::types::PutRequest::builder()
                            .set_item(Some(product_to_item(product)))
                            .build()
                            .expect("Failed to build PutRequest"),
                    )
                    .build()
            })
            .collect();

        client
            .batch_write_item()
            .request_items(table_name, write_requests)
            .send()
            .await
            .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

        inserted += chunk.len() as u32;
    }

    Ok(inserted)
}
