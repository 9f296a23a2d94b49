//! SNS API Gateway
//!
//! An HTTP gateway for a social-media-style backend (tweets, comments,
//! reposts, favorites, bookmarks, follows, notifications, chat rooms,
//! token authentication).
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 SNS GATEWAY                  │
//!                    │                                              │
//!   Client Request   │  ┌────────┐   ┌───────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│  routing  │──▶│ handlers │  │
//!                    │  │ server │   │dispatcher │   │ registry │  │
//!                    │  └────────┘   └───────────┘   └──────────┘  │
//!                    │       │                                      │
//!                    │       ▼                                      │
//!                    │  ┌──────────────────────────────────────┐    │
//!                    │  │         Cross-Cutting Concerns        │    │
//!                    │  │  ┌────────┐ ┌─────────┐ ┌──────────┐ │    │
//!                    │  │  │ config │ │ session │ │observa-  │ │    │
//!                    │  │  │        │ │ check   │ │ bility   │ │    │
//!                    │  │  └────────┘ └─────────┘ └──────────┘ │    │
//!                    │  └──────────────────────────────────────┘    │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! The core is the routing dispatcher: a static, immutable table built at
//! startup that resolves (method, path) to a (controller, action, params)
//! triple. The HTTP layer composes session-token middleware around it and
//! translates the two dispatch errors to 404 and 405.

// Core subsystems
pub mod config;
pub mod handlers;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod observability;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use routing::{DispatchError, Dispatcher, RouteMatch};
