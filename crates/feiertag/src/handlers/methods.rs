//! Responses for requests whose path matched but whose method did not.

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

fn reject(method: Method, message: &'static str) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    tracing::warn!(method = %method, "Method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": message })),
    )
        .into_response()
}

/// Fallback for read-only endpoints.
pub async fn method_not_allowed(method: Method) -> Response {
    reject(method, "Method not allowed")
}

/// Fallback for endpoints that only accept POST.
pub async fn post_only(method: Method) -> Response {
    reject(method, "Method not allowed. Use POST.")
}
