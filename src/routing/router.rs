//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes and mounted sub-tables
//! - Look up the matching route for a (method, path) pair
//! - Return the matched handler or an explicit no-match
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan over compiled patterns (acceptable for typical route counts)
//! - Exactly one winner per request: static segments beat parameters,
//!   deeper patterns beat shallower ones, declaration order breaks ties
//! - `NotFound` and `MethodNotAllowed` are values, never panics; the HTTP
//!   layer maps them to 404 and 405
//! - Mounts are tried before the primary table; a mount miss falls through,
//!   so a sub-router only shadows the paths it actually declares

use axum::http::Method;
use thiserror::Error;

use super::pattern::{split_path, PathParams, Specificity};
use super::route::{AuthPolicy, HandlerId, Route};

/// Dispatch failure, reported as a value for the HTTP layer to translate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No declared route matches the path.
    #[error("no route matches the requested path")]
    NotFound,
    /// The path is declared, but not for this method.
    #[error("method not allowed for this path")]
    MethodNotAllowed {
        /// Methods the path does accept, for the `Allow` header.
        allowed: Vec<Method>,
    },
}

/// A successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub handler: HandlerId,
    pub params: PathParams,
    pub auth: AuthPolicy,
}

/// Outcome of a lookup within a single table.
enum TableLookup {
    Hit(RouteMatch),
    /// No hit; carries the methods that would have matched the path.
    Miss(Vec<Method>),
}

/// An ordered list of routes sharing one lookup pass.
#[derive(Debug, Clone, Default)]
struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    fn lookup(&self, method: &Method, path: &str) -> TableLookup {
        let mut best: Option<(&Route, Specificity, PathParams)> = None;
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = route.pattern.matches(path) else {
                continue;
            };
            if !allowed.contains(&route.method) {
                allowed.push(route.method.clone());
            }
            if route.method != *method {
                continue;
            }
            let specificity = route.pattern.specificity();
            // Strictly-greater keeps the first-declared route on exact ties.
            let wins = match &best {
                Some((_, current, _)) => specificity > *current,
                None => true,
            };
            if wins {
                best = Some((route, specificity, params));
            }
        }

        match best {
            Some((route, _, params)) => TableLookup::Hit(RouteMatch {
                handler: route.handler.clone(),
                params,
                auth: route.auth,
            }),
            None => TableLookup::Miss(allowed),
        }
    }
}

/// A sub-table anchored at a static path prefix.
#[derive(Debug, Clone)]
struct Mount {
    prefix: Vec<String>,
    table: RouteTable,
}

impl Mount {
    /// Strip the mount prefix at a segment boundary, returning the remainder
    /// as a rooted path (`/sign_in`, or `/` for the mount root itself).
    fn strip_prefix(&self, path: &str) -> Option<String> {
        let mut segments = split_path(path);
        for expected in &self.prefix {
            if segments.next()? != expected {
                return None;
            }
        }
        let mut rest = String::new();
        for segment in segments {
            rest.push('/');
            rest.push_str(segment);
        }
        if rest.is_empty() {
            rest.push('/');
        }
        Some(rest)
    }
}

/// The route dispatcher.
///
/// Built once at startup from static declarations; resolution is pure and
/// safe to call concurrently from any number of workers.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    mounts: Vec<Mount>,
    primary: RouteTable,
}

impl Dispatcher {
    /// Create a dispatcher over a primary route table.
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            mounts: Vec::new(),
            primary: RouteTable { routes },
        }
    }

    /// Mount a sub-table at a static path prefix.
    ///
    /// Mounts are consulted in insertion order, before the primary table.
    /// A miss inside the mount falls through rather than terminating
    /// resolution, so `GET` on the mount root can still reach a primary
    /// route declared for the same path.
    pub fn mount(mut self, prefix: &str, routes: Vec<Route>) -> Self {
        self.mounts.push(Mount {
            prefix: split_path(prefix).map(str::to_string).collect(),
            table: RouteTable { routes },
        });
        self
    }

    /// Resolve a method + path to a handler, or report why not.
    ///
    /// `path` must be percent-decoded by the caller. Resolution has no side
    /// effects; invoking the resolved handler is the caller's concern.
    pub fn resolve(&self, method: &Method, path: &str) -> Result<RouteMatch, DispatchError> {
        let mut allowed: Vec<Method> = Vec::new();

        for mount in &self.mounts {
            let Some(rest) = mount.strip_prefix(path) else {
                continue;
            };
            match mount.table.lookup(method, &rest) {
                TableLookup::Hit(found) => return Ok(found),
                TableLookup::Miss(methods) => merge_allowed(&mut allowed, methods),
            }
        }

        match self.primary.lookup(method, path) {
            TableLookup::Hit(found) => Ok(found),
            TableLookup::Miss(methods) => {
                merge_allowed(&mut allowed, methods);
                if allowed.is_empty() {
                    Err(DispatchError::NotFound)
                } else {
                    allowed.sort_by(|a, b| a.as_str().cmp(b.as_str()));
                    Err(DispatchError::MethodNotAllowed { allowed })
                }
            }
        }
    }
}

fn merge_allowed(into: &mut Vec<Method>, methods: Vec<Method>) {
    for method in methods {
        if !into.contains(&method) {
            into.push(method);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Method;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(vec![
            Route::new(Method::GET, "/api/v1/tweets", ("posts", "index")),
            Route::new(Method::GET, "/api/v1/tweets/:id", ("posts", "show")),
            Route::new(Method::DELETE, "/api/v1/tweets/:id", ("posts", "destroy")),
            Route::new(
                Method::GET,
                "/api/v1/tweets/:tweet_id/comments",
                ("comments", "index"),
            ),
            Route::new(Method::GET, "/api/v1/users", ("users", "index")),
            Route::new(Method::GET, "/api/v1/users/:id", ("users", "show")),
        ])
        .mount(
            "/api/v1/users",
            vec![
                Route::public(Method::POST, "/", ("auth/registrations", "create")),
                Route::public(Method::POST, "/sign_in", ("auth/sessions", "create")),
                Route::public(Method::GET, "/confirmation", ("auth/confirmations", "show")),
            ],
        )
    }

    #[test]
    fn resolves_static_route() {
        let found = dispatcher()
            .resolve(&Method::GET, "/api/v1/tweets")
            .unwrap();
        assert_eq!(found.handler.to_string(), "posts#index");
        assert!(found.params.is_empty());
    }

    #[test]
    fn resolves_param_route_and_extracts() {
        let found = dispatcher()
            .resolve(&Method::GET, "/api/v1/tweets/42/comments")
            .unwrap();
        assert_eq!(found.handler.to_string(), "comments#index");
        assert_eq!(found.params.get("tweet_id"), Some("42"));
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(
            dispatcher().resolve(&Method::GET, "/api/v1/nonexistent"),
            Err(DispatchError::NotFound)
        );
    }

    #[test]
    fn wrong_method_is_method_not_allowed() {
        let err = dispatcher()
            .resolve(&Method::PATCH, "/api/v1/tweets/7")
            .unwrap_err();
        match err {
            DispatchError::MethodNotAllowed { allowed } => {
                assert_eq!(allowed, vec![Method::DELETE, Method::GET]);
            }
            other => panic!("expected MethodNotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn mount_hit_shadows_primary_param_route() {
        // /api/v1/users/confirmation would also match users#show (:id).
        let found = dispatcher()
            .resolve(&Method::GET, "/api/v1/users/confirmation")
            .unwrap();
        assert_eq!(found.handler.to_string(), "auth/confirmations#show");
    }

    #[test]
    fn mount_miss_falls_through_to_primary() {
        // The mount declares POST on its root; GET falls through to users#index.
        let found = dispatcher().resolve(&Method::GET, "/api/v1/users").unwrap();
        assert_eq!(found.handler.to_string(), "users#index");
    }

    #[test]
    fn mount_root_resolves() {
        let found = dispatcher()
            .resolve(&Method::POST, "/api/v1/users")
            .unwrap();
        assert_eq!(found.handler.to_string(), "auth/registrations#create");
        assert_eq!(found.auth, AuthPolicy::Public);
    }

    #[test]
    fn allowed_set_accumulates_across_tables() {
        // PUT on the mount root: mount knows POST, primary knows GET.
        let err = dispatcher()
            .resolve(&Method::PUT, "/api/v1/users")
            .unwrap_err();
        match err {
            DispatchError::MethodNotAllowed { allowed } => {
                assert!(allowed.contains(&Method::GET));
                assert!(allowed.contains(&Method::POST));
            }
            other => panic!("expected MethodNotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn first_declared_wins_on_exact_tie() {
        let dispatcher = Dispatcher::new(vec![
            Route::new(Method::POST, "/api/v1/images", ("posts", "upload_images")),
            Route::new(Method::POST, "/api/v1/images", ("comments", "upload_images")),
        ]);
        let found = dispatcher
            .resolve(&Method::POST, "/api/v1/images")
            .unwrap();
        assert_eq!(found.handler.to_string(), "posts#upload_images");
    }
}
