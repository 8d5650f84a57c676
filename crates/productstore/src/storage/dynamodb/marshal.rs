//! Conversion between JSON values and DynamoDB attribute values.
//!
//! Pure functions for translating the schemaless product payloads into the
//! engine's wire representation and back. Testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use productstore_core::product::Product;
use productstore_core::storage::RepositoryError;
use serde_json::{Map, Number, Value};

/// Convert a Product to a DynamoDB item, including its `id` key.
pub fn product_to_item(product: &Product) -> HashMap<String, AttributeValue> {
    let mut item = fields_to_item(&product.fields);
    item.insert("id".to_string(), AttributeValue::S(product.id.clone()));
    item
}

/// Convert a DynamoDB item to a Product.
pub fn item_to_product(
    item: &HashMap<String, AttributeValue>,
) -> Result<Product, RepositoryError> {
    let fields = item_to_fields(item)?;
    Product::from_fields(fields).map_err(|e| RepositoryError::InvalidData(e.to_string()))
}

/// Convert a JSON field map to a DynamoDB item.
pub fn fields_to_item(fields: &Map<String, Value>) -> HashMap<String, AttributeValue> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), json_to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB item to a JSON field map.
pub fn item_to_fields(
    item: &HashMap<String, AttributeValue>,
) -> Result<Map<String, Value>, RepositoryError> {
    item.iter()
        .map(|(key, value)| Ok((key.clone(), attribute_to_json(value)?)))
        .collect()
}

/// Convert a single JSON value to an AttributeValue.
pub fn json_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(flag) => AttributeValue::Bool(*flag),
        Value::Number(number) => AttributeValue::N(number.to_string()),
        Value::String(text) => AttributeValue::S(text.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(json_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(fields_to_item(map)),
    }
}

/// Convert a single AttributeValue to a JSON value.
///
/// String and number sets read back as arrays; binary attributes have no
/// JSON representation and surface as invalid data.
pub fn attribute_to_json(attr: &AttributeValue) -> Result<Value, RepositoryError> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(flag) => Ok(Value::Bool(*flag)),
        AttributeValue::N(number) => parse_number(number),
        AttributeValue::S(text) => Ok(Value::String(text.clone())),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => item_to_fields(map).map(Value::Object),
        AttributeValue::Ss(items) => Ok(Value::Array(
            items.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(items) => items
            .iter()
            .map(|n| parse_number(n))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        other => Err(RepositoryError::InvalidData(format!(
            "Unsupported attribute type: {:?}",
            other
        ))),
    }
}

fn parse_number(number: &str) -> Result<Value, RepositoryError> {
    number
        .parse::<Number>()
        .map(Value::Number)
        .map_err(|e| RepositoryError::InvalidData(format!("Invalid number attribute: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_values_convert_both_ways() {
        let cases = [
            json!("text"),
            json!(42),
            json!(-3.5),
            json!(true),
            json!(null),
        ];

        for value in cases {
            let attr = json_to_attribute(&value);
            assert_eq!(attribute_to_json(&attr).unwrap(), value);
        }
    }

    #[test]
    fn test_nested_structures_convert_both_ways() {
        let value = json!({
            "tags": ["a", "b"],
            "dimensions": {"width": 10, "height": 4.5},
            "discontinued": false
        });

        let attr = json_to_attribute(&value);
        assert_eq!(attribute_to_json(&attr).unwrap(), value);
    }

    #[test]
    fn test_number_attributes_keep_integer_shape() {
        let attr = json_to_attribute(&json!(7));
        assert_eq!(attr, AttributeValue::N("7".to_string()));
        assert_eq!(attribute_to_json(&attr).unwrap(), json!(7));
    }

    #[test]
    fn test_string_set_reads_back_as_array() {
        let attr = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(attribute_to_json(&attr).unwrap(), json!(["a", "b"]));
    }

    #[test]
    fn test_binary_attribute_is_invalid_data() {
        let attr = AttributeValue::B(aws_sdk_dynamodb::primitives::Blob::new(vec![1, 2, 3]));
        assert!(matches!(
            attribute_to_json(&attr),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_product_item_includes_id_key() {
        let product =
            Product::from_value(json!({"id": "p-1", "name": "Hammer", "price": 9.99})).unwrap();
        let item = product_to_item(&product);

        assert_eq!(item["id"], AttributeValue::S("p-1".to_string()));
        assert_eq!(item["name"], AttributeValue::S("Hammer".to_string()));
        assert_eq!(item["price"], AttributeValue::N("9.99".to_string()));
    }

    #[test]
    fn test_item_without_id_is_invalid_data() {
        let item = HashMap::from([(
            "name".to_string(),
            AttributeValue::S("Hammer".to_string()),
        )]);

        assert!(matches!(
            item_to_product(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }

    #[test]
    fn test_item_round_trips_to_product() {
        let product =
            Product::from_value(json!({"id": "p-1", "category": "tools", "stock": 3})).unwrap();
        let item = product_to_item(&product);
        let parsed = item_to_product(&item).unwrap();

        assert_eq!(parsed, product);
    }
}
