//! Session-scoped record store
//!
//! One [`SessionStore`] owns every mutable collection for a signed-in
//! session and implements the core repository ports over them.

pub mod session_store;

pub use session_store::{SessionSnapshot, SessionStore};
