//! The declared route table for the API.
//!
//! # Responsibilities
//! - Enumerate every endpoint of the v1 API as plain route records
//! - Mount the token-auth sub-router under `/api/v1/users`
//!
//! # Design Decisions
//! - Fully static declarations, no macro-generated CRUD expansion; what you
//!   read here is the exact HTTP surface
//! - The auth sub-router keeps its own table so its endpoints stay grouped
//!   and the `/api/v1/users` prefix is reserved for it
//! - `POST /api/v1/images` is declared twice on purpose; the first-declared
//!   target (`posts#upload_images`) wins the tie

use axum::http::Method;

use super::route::Route;
use super::router::Dispatcher;

/// Build the dispatcher for the full v1 API surface.
pub fn api_v1() -> Dispatcher {
    Dispatcher::new(routes()).mount("/api/v1/users", auth_routes())
}

/// Primary route table.
pub fn routes() -> Vec<Route> {
    const GET: Method = Method::GET;
    const POST: Method = Method::POST;
    const PATCH: Method = Method::PATCH;
    const DELETE: Method = Method::DELETE;

    vec![
        // Tweets, with nested comments / retweets / favorites / bookmarks.
        Route::new(GET, "/api/v1/tweets", ("posts", "index")),
        Route::new(POST, "/api/v1/tweets", ("posts", "create")),
        Route::new(GET, "/api/v1/tweets/:id", ("posts", "show")),
        Route::new(DELETE, "/api/v1/tweets/:id", ("posts", "destroy")),
        Route::new(GET, "/api/v1/tweets/:tweet_id/comments", ("comments", "index")),
        Route::new(POST, "/api/v1/tweets/:tweet_id/retweets", ("reposts", "create")),
        Route::new(DELETE, "/api/v1/tweets/:tweet_id/retweets", ("reposts", "destroy")),
        Route::new(POST, "/api/v1/tweets/:tweet_id/favorites", ("favorites", "create")),
        Route::new(DELETE, "/api/v1/tweets/:tweet_id/favorites", ("favorites", "destroy")),
        Route::new(POST, "/api/v1/tweets/:tweet_id/bookmarks", ("bookmarks", "create")),
        Route::new(DELETE, "/api/v1/tweets/:tweet_id/bookmarks", ("bookmarks", "destroy")),
        // Comments.
        Route::new(POST, "/api/v1/comments", ("comments", "create")),
        Route::new(DELETE, "/api/v1/comments/:id", ("comments", "destroy")),
        Route::new(POST, "/api/v1/comments/:id/upload_images", ("comments", "upload_images")),
        // Image upload collection; both targets declared, first wins.
        Route::new(POST, "/api/v1/images", ("posts", "upload_images")),
        Route::new(POST, "/api/v1/images", ("comments", "upload_images")),
        // Profile and users.
        Route::new(PATCH, "/api/v1/profile", ("users", "update_profile")),
        Route::new(GET, "/api/v1/users", ("users", "index")),
        Route::new(GET, "/api/v1/users/:id", ("users", "show")),
        Route::new(POST, "/api/v1/users/:id/follow", ("follows", "create")),
        Route::new(DELETE, "/api/v1/users/:id/unfollow", ("follows", "destroy")),
        // Notifications and bookmarks.
        Route::new(GET, "/api/v1/notifications", ("notifications", "index")),
        Route::new(GET, "/api/v1/bookmarks", ("bookmarks", "index")),
        // Session listing (devices signed in).
        Route::new(GET, "/api/v1/auth/sessions", ("auth/sessions", "index")),
        // Chat rooms and messages.
        Route::new(GET, "/api/v1/rooms", ("rooms", "index")),
        Route::new(POST, "/api/v1/rooms", ("rooms", "create")),
        Route::new(GET, "/api/v1/rooms/:id", ("rooms", "show")),
        Route::new(GET, "/api/v1/rooms/:room_id/messages", ("messages", "index")),
        Route::new(POST, "/api/v1/rooms/:room_id/messages", ("messages", "create")),
        // Health check, no authentication.
        Route::public(GET, "/health", ("health", "index")),
    ]
}

/// Token-auth sub-router, mounted at `/api/v1/users`.
///
/// Registration lives on the mount root; everything else is a static
/// sub-path. All of these are reachable without an existing session except
/// the account update/delete and sign-out endpoints.
pub fn auth_routes() -> Vec<Route> {
    const GET: Method = Method::GET;
    const POST: Method = Method::POST;
    const PUT: Method = Method::PUT;
    const DELETE: Method = Method::DELETE;

    vec![
        Route::public(POST, "/", ("auth/registrations", "create")),
        Route::new(PUT, "/", ("auth/registrations", "update")),
        Route::new(DELETE, "/", ("auth/registrations", "destroy")),
        Route::public(POST, "/sign_in", ("auth/sessions", "create")),
        Route::new(DELETE, "/sign_out", ("auth/sessions", "destroy")),
        Route::public(GET, "/validate_token", ("auth/token_validations", "validate_token")),
        Route::public(GET, "/confirmation", ("auth/confirmations", "show")),
        Route::public(POST, "/confirmation", ("auth/confirmations", "create")),
        Route::public(POST, "/password", ("auth/passwords", "create")),
        Route::new(PUT, "/password", ("auth/passwords", "update")),
        Route::public(GET, "/password/edit", ("auth/passwords", "edit")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::AuthPolicy;

    #[test]
    fn every_declared_route_resolves_to_its_handler() {
        let dispatcher = api_v1();
        let cases = [
            (Method::GET, "/api/v1/tweets", "posts#index"),
            (Method::POST, "/api/v1/tweets", "posts#create"),
            (Method::GET, "/api/v1/tweets/5", "posts#show"),
            (Method::DELETE, "/api/v1/tweets/5", "posts#destroy"),
            (Method::GET, "/api/v1/tweets/5/comments", "comments#index"),
            (Method::POST, "/api/v1/tweets/5/retweets", "reposts#create"),
            (Method::DELETE, "/api/v1/tweets/5/retweets", "reposts#destroy"),
            (Method::POST, "/api/v1/tweets/5/favorites", "favorites#create"),
            (Method::DELETE, "/api/v1/tweets/5/favorites", "favorites#destroy"),
            (Method::POST, "/api/v1/tweets/5/bookmarks", "bookmarks#create"),
            (Method::DELETE, "/api/v1/tweets/5/bookmarks", "bookmarks#destroy"),
            (Method::POST, "/api/v1/comments", "comments#create"),
            (Method::DELETE, "/api/v1/comments/9", "comments#destroy"),
            (Method::POST, "/api/v1/comments/9/upload_images", "comments#upload_images"),
            (Method::POST, "/api/v1/images", "posts#upload_images"),
            (Method::PATCH, "/api/v1/profile", "users#update_profile"),
            (Method::GET, "/api/v1/users", "users#index"),
            (Method::GET, "/api/v1/users/3", "users#show"),
            (Method::POST, "/api/v1/users/3/follow", "follows#create"),
            (Method::DELETE, "/api/v1/users/3/unfollow", "follows#destroy"),
            (Method::GET, "/api/v1/notifications", "notifications#index"),
            (Method::GET, "/api/v1/bookmarks", "bookmarks#index"),
            (Method::GET, "/api/v1/auth/sessions", "auth/sessions#index"),
            (Method::GET, "/api/v1/rooms", "rooms#index"),
            (Method::POST, "/api/v1/rooms", "rooms#create"),
            (Method::GET, "/api/v1/rooms/2", "rooms#show"),
            (Method::GET, "/api/v1/rooms/2/messages", "messages#index"),
            (Method::POST, "/api/v1/rooms/2/messages", "messages#create"),
            (Method::GET, "/health", "health#index"),
        ];

        for (method, path, handler) in cases {
            let found = dispatcher
                .resolve(&method, path)
                .unwrap_or_else(|e| panic!("{method} {path} failed to resolve: {e}"));
            assert_eq!(found.handler.to_string(), handler, "{method} {path}");
        }
    }

    #[test]
    fn auth_endpoints_resolve_inside_the_mount() {
        let dispatcher = api_v1();
        let cases = [
            (Method::POST, "/api/v1/users", "auth/registrations#create"),
            (Method::PUT, "/api/v1/users", "auth/registrations#update"),
            (Method::DELETE, "/api/v1/users", "auth/registrations#destroy"),
            (Method::POST, "/api/v1/users/sign_in", "auth/sessions#create"),
            (Method::DELETE, "/api/v1/users/sign_out", "auth/sessions#destroy"),
            (Method::GET, "/api/v1/users/validate_token", "auth/token_validations#validate_token"),
            (Method::GET, "/api/v1/users/confirmation", "auth/confirmations#show"),
            (Method::POST, "/api/v1/users/confirmation", "auth/confirmations#create"),
            (Method::POST, "/api/v1/users/password", "auth/passwords#create"),
            (Method::PUT, "/api/v1/users/password", "auth/passwords#update"),
            (Method::GET, "/api/v1/users/password/edit", "auth/passwords#edit"),
        ];

        for (method, path, handler) in cases {
            let found = dispatcher
                .resolve(&method, path)
                .unwrap_or_else(|e| panic!("{method} {path} failed to resolve: {e}"));
            assert_eq!(found.handler.to_string(), handler, "{method} {path}");
        }
    }

    #[test]
    fn health_and_sign_in_are_public() {
        let dispatcher = api_v1();
        let health = dispatcher.resolve(&Method::GET, "/health").unwrap();
        assert_eq!(health.auth, AuthPolicy::Public);

        let sign_in = dispatcher
            .resolve(&Method::POST, "/api/v1/users/sign_in")
            .unwrap();
        assert_eq!(sign_in.auth, AuthPolicy::Public);

        let timeline = dispatcher.resolve(&Method::GET, "/api/v1/tweets").unwrap();
        assert_eq!(timeline.auth, AuthPolicy::Required);
    }
}
