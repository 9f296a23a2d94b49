//! HTTP server setup and dispatch handling.
//!
//! # Responsibilities
//! - Create the Axum router with a catch-all dispatch handler
//! - Wire up middleware (timeout, request ID, tracing, session)
//! - Translate dispatch errors to 404/405 responses
//! - Invoke the matched handler from the registry
//! - Record per-request metrics
//!
//! # Design Decisions
//! - A single catch-all route: resolution happens in our dispatcher, not in
//!   Axum's own matcher, so the declared table stays the one source of truth
//! - Handlers unbound in the registry answer 501 rather than panicking
//! - Graceful shutdown on Ctrl+C

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AuthConfig, GatewayConfig};
use crate::handlers::HandlerRegistry;
use crate::http::middleware::session::{require_session, HeaderPresence, SessionValidator};
use crate::http::request::RequestUuid;
use crate::http::response;
use crate::observability::metrics;
use crate::routing::{table, DispatchError, Dispatcher};

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub registry: Arc<HandlerRegistry>,
    pub sessions: Arc<dyn SessionValidator>,
    pub auth: AuthConfig,
}

/// HTTP server for the API gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a server over the declared v1 route table, with the built-in
    /// handler registry and presence-only session validation.
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_registry(
            config,
            HandlerRegistry::with_builtins(),
            Arc::new(HeaderPresence),
        )
    }

    /// Create a server with application-supplied handlers and validator.
    pub fn with_registry(
        config: GatewayConfig,
        registry: HandlerRegistry,
        sessions: Arc<dyn SessionValidator>,
    ) -> Self {
        let state = AppState {
            dispatcher: Arc::new(table::api_v1()),
            registry: Arc::new(registry),
            sessions,
            auth: config.auth.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .layer(axum::middleware::from_fn_with_state(
                state.clone(),
                require_session,
            ))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            // Set is outermost so the trace span and the propagated response
            // header both see the same ID.
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(RequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Consume the server, yielding the underlying Axum router.
    ///
    /// Useful for embedding the gateway in a larger application or driving
    /// it directly in tests.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Catch-all handler: resolve the route, then delegate.
async fn dispatch_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> impl IntoResponse {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match state.dispatcher.resolve(&method, &path) {
        Ok(found) => {
            tracing::debug!(
                method = %method,
                path = %path,
                handler = %found.handler,
                "Dispatching request"
            );
            let handler_name = found.handler.to_string();
            let response: Response = match state.registry.get(&found.handler) {
                Some(handler) => handler.call(request, found.params).await,
                None => response::not_implemented(&found.handler),
            };
            metrics::record_dispatch(
                method.as_str(),
                response.status().as_u16(),
                &handler_name,
                start_time,
            );
            response
        }
        Err(DispatchError::NotFound) => {
            tracing::warn!(method = %method, path = %path, "No route matched");
            metrics::record_dispatch(method.as_str(), 404, "none", start_time);
            response::not_found()
        }
        Err(DispatchError::MethodNotAllowed { allowed }) => {
            tracing::warn!(method = %method, path = %path, "Method not allowed");
            metrics::record_dispatch(method.as_str(), 405, "none", start_time);
            response::method_not_allowed(&allowed)
        }
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
