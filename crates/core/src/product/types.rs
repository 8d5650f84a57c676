use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ProductError;

/// A stored product record.
///
/// Products are schemaless apart from the `id` partition key: clients supply
/// whatever fields they want and the store round-trips them unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    /// All remaining fields, exactly as the client supplied them.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Creates a product with the given id and fields.
    ///
    /// An `id` key inside `fields` is discarded; the explicit id wins.
    pub fn new(id: impl Into<String>, mut fields: Map<String, Value>) -> Result<Self, ProductError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ProductError::MissingId);
        }
        fields.remove("id");
        Ok(Self { id, fields })
    }

    /// Builds a product from a raw field map, extracting the `id` key.
    pub fn from_fields(mut fields: Map<String, Value>) -> Result<Self, ProductError> {
        let id = match fields.remove("id") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(ProductError::MissingId),
        };
        Ok(Self { id, fields })
    }

    /// Builds a product from a JSON value, which must be an object with an id.
    pub fn from_value(value: Value) -> Result<Self, ProductError> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Err(ProductError::NotAnObject),
        }
    }

    /// Converts the product into a single JSON object including `id`.
    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert("id".to_string(), Value::String(self.id));
        Value::Object(fields)
    }
}
