//! Response construction for dispatch outcomes.
//!
//! # Responsibilities
//! - Translate dispatch errors into HTTP status codes (404, 405)
//! - Shape JSON error bodies consistently across the gateway
//! - Attach the `Allow` header on 405 responses
//!
//! # Design Decisions
//! - Errors are JSON, matching what an API client expects from the backend
//! - The 405 `Allow` header lists every method the path accepts

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::routing::HandlerId;

/// Generic JSON error body.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "error": {
                "status": status.as_u16(),
                "message": message,
            }
        })),
    )
        .into_response()
}

/// 404 for paths with no declared route.
pub fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "no route matches the requested path")
}

/// 405 for declared paths hit with the wrong verb.
pub fn method_not_allowed(allowed: &[Method]) -> Response {
    let mut response = error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        "method not allowed for this path",
    );
    let list = allowed
        .iter()
        .map(Method::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if let Ok(value) = HeaderValue::from_str(&list) {
        response.headers_mut().insert(header::ALLOW, value);
    }
    response
}

/// 401 for protected routes without a valid session.
pub fn unauthorized(message: &str) -> Response {
    error_response(StatusCode::UNAUTHORIZED, message)
}

/// 501 for routes whose handler has not been bound in the registry.
pub fn not_implemented(handler: &HandlerId) -> Response {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "error": {
                "status": 501,
                "message": "handler not implemented",
                "controller": handler.controller,
                "action": handler.action,
            }
        })),
    )
        .into_response()
}
