//! Response envelopes for the handler boundary.
//!
//! Every invocation resolves to one of two shapes: a 200 with the operation
//! result, or a 500 with diagnostic fields. Nothing else leaves the handler.

use lambda_http::http::{header, StatusCode};
use lambda_http::{Body, Response};
use serde_json::{json, Value};

use crate::error::HandlerError;

/// Builds the success envelope around an operation result.
pub fn success(method: &str, body: Value) -> Response<Body> {
    let payload = json!({
        "message": format!("Successfully finished operation: \"{method}\""),
        "body": body,
    });
    into_response(StatusCode::OK, &payload)
}

/// Builds the failure envelope for a propagated error.
pub fn failure(error: &HandlerError) -> Response<Body> {
    let payload = json!({
        "message": "Failed to perform operation.",
        "errorMsg": error.to_string(),
        "errStack": error_stack(error),
    });
    into_response(StatusCode::INTERNAL_SERVER_ERROR, &payload)
}

/// Renders an error and its source chain for diagnostics.
fn error_stack(error: &HandlerError) -> String {
    let mut rendered = format!("{error:?}");
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        rendered.push_str(&format!("\ncaused by: {cause}"));
        source = cause.source();
    }
    rendered
}

fn into_response(status: StatusCode, payload: &Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::Text(payload.to_string()))
        .expect("response built from static parts")
}
