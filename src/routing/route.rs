//! Route records.
//!
//! # Responsibilities
//! - Represent one declared route: method, pattern, handler, auth policy
//! - Name the handler as a (controller, action) pair
//!
//! # Design Decisions
//! - Routes are plain data, declared once at startup and never mutated
//! - The dispatcher never invokes handlers; it only names them

use axum::http::Method;
use std::fmt;

use super::pattern::PathPattern;

/// Identifier of the handler a route delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId {
    pub controller: &'static str,
    pub action: &'static str,
}

impl HandlerId {
    pub const fn new(controller: &'static str, action: &'static str) -> Self {
        Self { controller, action }
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.controller, self.action)
    }
}

/// Whether a route is reachable without a session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Session token headers required (enforced by middleware, not dispatch).
    Required,
    /// No authentication (health check, sign-up, sign-in, ...).
    Public,
}

/// One declared route.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub pattern: PathPattern,
    pub handler: HandlerId,
    pub auth: AuthPolicy,
}

impl Route {
    /// Declare a session-protected route. `handler` is `"controller#action"`.
    pub fn new(method: Method, pattern: &str, handler: (&'static str, &'static str)) -> Self {
        Self {
            method,
            pattern: PathPattern::parse(pattern),
            handler: HandlerId::new(handler.0, handler.1),
            auth: AuthPolicy::Required,
        }
    }

    /// Declare a route reachable without a session.
    pub fn public(method: Method, pattern: &str, handler: (&'static str, &'static str)) -> Self {
        Self {
            auth: AuthPolicy::Public,
            ..Self::new(method, pattern, handler)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_id_formats_as_controller_action() {
        let id = HandlerId::new("posts", "index");
        assert_eq!(id.to_string(), "posts#index");
    }

    #[test]
    fn routes_default_to_requiring_auth() {
        let route = Route::new(Method::GET, "/api/v1/tweets", ("posts", "index"));
        assert_eq!(route.auth, AuthPolicy::Required);

        let health = Route::public(Method::GET, "/health", ("health", "index"));
        assert_eq!(health.auth, AuthPolicy::Public);
    }
}
