//! Request routing and the single catch boundary.
//!
//! Operation selection follows the HTTP method plus the presence of path and
//! query parameters. Whatever an operation returns or raises, the caller
//! always receives a structured response: errors stop here.

use lambda_http::{Body, Request, RequestExt, Response};
use productstore_core::storage::ProductRepository;
use serde_json::Value;

use crate::error::{HandlerError, Result};
use crate::handlers::products;
use crate::response;

/// Routes an inbound event to exactly one operation and converts the outcome
/// into a response. Never returns an error.
pub async fn handle_event(repository: &dyn ProductRepository, event: Request) -> Response<Body> {
    let method = event.method().clone();
    tracing::info!(method = %method, path = %event.uri().path(), "Received request");
    tracing::debug!(event = ?event, "Raw inbound event");

    match dispatch(repository, &event).await {
        Ok(body) => {
            tracing::info!(method = %method, "Operation succeeded");
            tracing::debug!(body = %body, "Operation result");
            response::success(method.as_str(), body)
        }
        Err(error) => {
            tracing::error!(method = %method, error = %error, "Operation failed");
            response::failure(&error)
        }
    }
}

async fn dispatch(repository: &dyn ProductRepository, event: &Request) -> Result<Value> {
    let path_params = event.path_parameters();
    let query_params = event.query_string_parameters();
    let id = path_params.first("id");

    match event.method().as_str() {
        "GET" => {
            if !query_params.is_empty() {
                let id = id.ok_or(HandlerError::MissingParameter("id"))?;
                let category = query_params
                    .first("category")
                    .ok_or(HandlerError::MissingParameter("category"))?;
                products::get_products_by_category(repository, id, category).await
            } else if let Some(id) = id {
                products::get_product(repository, id).await
            } else {
                products::get_all_products(repository).await
            }
        }
        "POST" => products::create_product(repository, body_text(event)?).await,
        "PUT" => {
            let id = id.ok_or(HandlerError::MissingParameter("id"))?;
            products::update_product(repository, id, body_text(event)?).await
        }
        "DELETE" => {
            let id = id.ok_or(HandlerError::MissingParameter("id"))?;
            products::delete_product(repository, id).await
        }
        other => Err(HandlerError::UnsupportedOperation(other.to_string())),
    }
}

fn body_text(event: &Request) -> Result<&str> {
    match event.body() {
        Body::Empty => Ok(""),
        Body::Text(text) => Ok(text),
        Body::Binary(bytes) => {
            std::str::from_utf8(bytes).map_err(|e| HandlerError::MalformedRequest(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::inmemory::InMemoryRepository;
    use lambda_http::http;
    use serde_json::json;
    use std::collections::HashMap;

    fn request(method: &str, body: &str) -> Request {
        http::Request::builder()
            .method(method)
            .uri("/products")
            .body(Body::from(body))
            .unwrap()
    }

    fn with_id(request: Request, id: &str) -> Request {
        request.with_path_parameters(HashMap::from([("id".to_string(), vec![id.to_string()])]))
    }

    fn with_category(request: Request, category: &str) -> Request {
        request.with_query_string_parameters(HashMap::from([(
            "category".to_string(),
            vec![category.to_string()],
        )]))
    }

    fn body_json(response: &Response<Body>) -> Value {
        match response.body() {
            Body::Text(text) => serde_json::from_str(text).unwrap(),
            other => panic!("expected a text body, got {:?}", other),
        }
    }

    async fn created_id(repository: &InMemoryRepository, payload: Value) -> String {
        let response = handle_event(repository, request("POST", &payload.to_string())).await;
        assert_eq!(response.status(), 200);
        body_json(&response)["body"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_get_all_on_empty_table_returns_empty_array() {
        let repository = InMemoryRepository::new();

        let response = handle_event(&repository, request("GET", "")).await;

        assert_eq!(response.status(), 200);
        let payload = body_json(&response);
        assert_eq!(
            payload["message"],
            json!("Successfully finished operation: \"GET\"")
        );
        assert_eq!(payload["body"], json!([]));
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_empty_object() {
        let repository = InMemoryRepository::new();

        let response = handle_event(&repository, with_id(request("GET", ""), "nope")).await;

        assert_eq!(response.status(), 200);
        assert_eq!(body_json(&response)["body"], json!({}));
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips_fields() {
        let repository = InMemoryRepository::new();
        let id = created_id(
            &repository,
            json!({"name": "Hammer", "category": "tools", "price": 9.99}),
        )
        .await;

        let response = handle_event(&repository, with_id(request("GET", ""), &id)).await;

        let body = &body_json(&response)["body"];
        assert_eq!(body["id"], json!(id));
        assert_eq!(body["name"], json!("Hammer"));
        assert_eq!(body["category"], json!("tools"));
        assert_eq!(body["price"], json!(9.99));
    }

    #[tokio::test]
    async fn test_create_overwrites_client_supplied_id() {
        let repository = InMemoryRepository::new();
        let id = created_id(&repository, json!({"id": "mine", "name": "Hammer"})).await;

        assert_ne!(id, "mine");
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_invalid_json_fails() {
        let repository = InMemoryRepository::new();

        let response = handle_event(&repository, request("POST", "{not json")).await;

        assert_eq!(response.status(), 500);
        let payload = body_json(&response);
        assert_eq!(payload["message"], json!("Failed to perform operation."));
        assert!(payload["errorMsg"]
            .as_str()
            .unwrap()
            .starts_with("Malformed request body"));
    }

    #[tokio::test]
    async fn test_get_by_category_filters_on_substring() {
        let repository = InMemoryRepository::new();
        let id = created_id(&repository, json!({"name": "Hammer", "category": "hand tools"})).await;

        let hit = handle_event(
            &repository,
            with_category(with_id(request("GET", ""), &id), "tool"),
        )
        .await;
        assert_eq!(body_json(&hit)["body"].as_array().unwrap().len(), 1);

        let miss = handle_event(
            &repository,
            with_category(with_id(request("GET", ""), &id), "garden"),
        )
        .await;
        assert_eq!(body_json(&miss)["body"], json!([]));
    }

    #[tokio::test]
    async fn test_update_merges_fields_and_keeps_others() {
        let repository = InMemoryRepository::new();
        let id = created_id(&repository, json!({"name": "Hammer", "price": 9.99})).await;

        let response = handle_event(
            &repository,
            with_id(request("PUT", &json!({"category": "X"}).to_string()), &id),
        )
        .await;
        assert_eq!(response.status(), 200);

        let fetched = handle_event(&repository, with_id(request("GET", ""), &id)).await;
        let body = &body_json(&fetched)["body"];
        assert_eq!(body["category"], json!("X"));
        assert_eq!(body["name"], json!("Hammer"));
        assert_eq!(body["price"], json!(9.99));
    }

    #[tokio::test]
    async fn test_update_with_empty_payload_fails_before_storage() {
        let repository = InMemoryRepository::new();

        let response = handle_event(&repository, with_id(request("PUT", "{}"), "p-1")).await;

        assert_eq!(response.status(), 500);
        assert_eq!(
            body_json(&response)["errorMsg"],
            json!("Update payload has no fields to set")
        );
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repository = InMemoryRepository::new();
        let id = created_id(&repository, json!({"name": "Hammer"})).await;

        let first = handle_event(&repository, with_id(request("DELETE", ""), &id)).await;
        let second = handle_event(&repository, with_id(request("DELETE", ""), &id)).await;

        assert_eq!(first.status(), 200);
        assert_eq!(second.status(), 200);
    }

    #[tokio::test]
    async fn test_unsupported_method_carries_method_name() {
        let repository = InMemoryRepository::new();

        let response = handle_event(&repository, request("PATCH", "")).await;

        assert_eq!(response.status(), 500);
        assert_eq!(
            body_json(&response)["errorMsg"],
            json!("Unsupported route: \"PATCH\"")
        );
    }

    #[tokio::test]
    async fn test_put_without_path_id_fails() {
        let repository = InMemoryRepository::new();

        let response =
            handle_event(&repository, request("PUT", &json!({"a": 1}).to_string())).await;

        assert_eq!(response.status(), 500);
        assert_eq!(
            body_json(&response)["errorMsg"],
            json!("Missing request parameter \"id\"")
        );
    }
}
