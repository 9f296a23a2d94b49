//! Middleware composed around the dispatch handler.

pub mod session;

pub use session::{require_session, HeaderPresence, SessionToken, SessionValidator};
