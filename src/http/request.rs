//! Request identity.
//!
//! # Responsibilities
//! - Generate a unique ID for every incoming request (UUID v4)
//! - Make the ID available to logging and to clients via `x-request-id`
//!
//! # Design Decisions
//! - The ID is added as the outermost layer so every log line and the
//!   response header agree on it
//! - Client-supplied `x-request-id` headers are preserved, not overwritten

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Mints a fresh UUID v4 per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestUuid;

impl MakeRequestId for RequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}
