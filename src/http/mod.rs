//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all dispatch handler)
//!     → middleware (request ID, timeout, session check)
//!     → routing layer resolves (controller, action, params)
//!     → handler registry invokes the bound handler
//!     → response.rs shapes errors (404 / 405 / 401 / 501)
//! ```

pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
