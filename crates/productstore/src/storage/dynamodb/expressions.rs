//! Update expression assembly.
//!
//! Client-supplied field names go through indexed name placeholders so that
//! names colliding with DynamoDB reserved words stay valid; values go through
//! matching value placeholders.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Value};

use super::marshal::json_to_attribute;

/// A `SET` update expression with its placeholder maps.
#[derive(Debug)]
pub struct UpdateExpression {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

/// Builds `SET #key0 = :value0, #key1 = :value1, ...` for every field in
/// the payload.
///
/// Callers validate the payload is non-empty; an empty map would assemble a
/// syntactically invalid expression.
pub fn build_set_expression(fields: &Map<String, Value>) -> UpdateExpression {
    let mut clauses = Vec::with_capacity(fields.len());
    let mut names = HashMap::with_capacity(fields.len());
    let mut values = HashMap::with_capacity(fields.len());

    for (index, (key, value)) in fields.iter().enumerate() {
        clauses.push(format!("#key{index} = :value{index}"));
        names.insert(format!("#key{index}"), key.clone());
        values.insert(format!(":value{index}"), json_to_attribute(value));
    }

    UpdateExpression {
        expression: format!("SET {}", clauses.join(", ")),
        names,
        values,
    }
}
