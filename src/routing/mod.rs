//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (mount pass, then primary table)
//!     → pattern.rs (segment match, parameter extraction)
//!     → Return: RouteMatch or DispatchError
//!
//! Table Compilation (at startup):
//!     table.rs declarations
//!     → Parse patterns into segments
//!     → Freeze as immutable Dispatcher
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex in the hot path (segment comparison only)
//! - Deterministic: same input always resolves to the same route
//! - Most specific pattern wins; declaration order breaks ties

pub mod pattern;
pub mod route;
pub mod router;
pub mod table;

pub use pattern::{PathParams, PathPattern};
pub use route::{AuthPolicy, HandlerId, Route};
pub use router::{DispatchError, Dispatcher, RouteMatch};
