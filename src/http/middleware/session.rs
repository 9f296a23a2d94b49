//! Session token middleware.
//!
//! # Responsibilities
//! - Enforce the session requirement on protected routes
//! - Extract the token headers the auth plugin issues
//! - Delegate actual token validation to the external collaborator
//!
//! # Design Decisions
//! - Dispatch itself never enforces auth; this middleware composes around it
//!   and reuses the same pure `resolve` to learn the route's policy
//! - Public routes (health, sign-up, sign-in, ...) and unmatched paths pass
//!   through; 404/405 are produced downstream by the dispatch handler
//! - `SessionValidator` is a seam: the default implementation only checks
//!   header presence, real validation belongs to the auth backend

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::http::response::unauthorized;
use crate::http::server::AppState;
use crate::routing::AuthPolicy;

/// Token triple carried on every authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub access_token: String,
    pub client: String,
    pub uid: String,
}

/// External session validation seam.
pub trait SessionValidator: Send + Sync {
    /// Returns true if the token identifies a live session.
    fn validate(&self, token: &SessionToken) -> bool;
}

/// Default validator: accepts any request that carries all three headers.
///
/// Real deployments replace this with a validator backed by the auth plugin.
#[derive(Debug, Default)]
pub struct HeaderPresence;

impl SessionValidator for HeaderPresence {
    fn validate(&self, _token: &SessionToken) -> bool {
        true
    }
}

/// Reject protected routes lacking a valid session token.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !state.auth.enabled {
        return next.run(request).await;
    }

    let policy = state
        .dispatcher
        .resolve(request.method(), request.uri().path())
        .map(|found| found.auth);

    // Public routes and dispatch misses continue; the dispatch handler
    // produces the 404/405 for misses.
    if policy != Ok(AuthPolicy::Required) {
        return next.run(request).await;
    }

    let Some(token) = extract_token(&request, &state) else {
        tracing::debug!(path = %request.uri().path(), "Missing session token headers");
        return unauthorized("missing session token headers");
    };

    if !state.sessions.validate(&token) {
        tracing::debug!(uid = %token.uid, "Session token rejected");
        return unauthorized("invalid or expired session token");
    }

    next.run(request).await
}

fn extract_token(request: &Request<Body>, state: &AppState) -> Option<SessionToken> {
    let header = |name: &str| -> Option<String> {
        request
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    Some(SessionToken {
        access_token: header(&state.auth.token_header)?,
        client: header(&state.auth.client_header)?,
        uid: header(&state.auth.uid_header)?,
    })
}
