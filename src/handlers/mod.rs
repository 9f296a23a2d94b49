//! Handler registry.
//!
//! # Responsibilities
//! - Define the seam between dispatch and the controllers behind it
//! - Map a resolved `HandlerId` to an invocable async handler
//!
//! # Design Decisions
//! - Controllers are external collaborators; the gateway only names them.
//!   The registry lets an embedding application plug real controllers in,
//!   while unbound handlers surface as 501 at the HTTP layer
//! - Only `health#index` ships built in, so a bare gateway still answers
//!   its health probe

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::routing::{HandlerId, PathParams};

pub type HandlerFuture = Pin<Box<dyn Future<Output = Response> + Send>>;

/// An invocable controller action.
pub trait Handler: Send + Sync {
    fn call(&self, request: Request<Body>, params: PathParams) -> HandlerFuture;
}

impl<F, Fut> Handler for F
where
    F: Fn(Request<Body>, PathParams) -> Fut + Send + Sync,
    Fut: Future<Output = Response> + Send + 'static,
{
    fn call(&self, request: Request<Body>, params: PathParams) -> HandlerFuture {
        Box::pin(self(request, params))
    }
}

/// Registry of controller actions, keyed by `controller#action`.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<HandlerId, Box<dyn Handler>>,
}

impl HandlerRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with the built-in handlers (`health#index`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("health", "index", health_index);
        registry
    }

    /// Bind a handler to a controller action.
    pub fn register(
        &mut self,
        controller: &'static str,
        action: &'static str,
        handler: impl Handler + 'static,
    ) {
        self.handlers
            .insert(HandlerId::new(controller, action), Box::new(handler));
    }

    /// Look up the handler for a resolved route, if one is bound.
    pub fn get(&self, id: &HandlerId) -> Option<&dyn Handler> {
        self.handlers.get(id).map(|h| h.as_ref())
    }
}

/// Built-in health check. Always 200, no authentication.
async fn health_index(_request: Request<Body>, _params: PathParams) -> Response {
    Json(json!({ "status": "ok" })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn builtin_health_handler_answers_ok() {
        let registry = HandlerRegistry::with_builtins();
        let handler = registry
            .get(&HandlerId::new("health", "index"))
            .expect("health handler registered");

        let request = Request::builder().body(Body::empty()).unwrap();
        let response = handler.call(request, PathParams::default()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn unbound_handlers_are_absent() {
        let registry = HandlerRegistry::with_builtins();
        assert!(registry.get(&HandlerId::new("posts", "index")).is_none());
    }
}
