//! # SolarQuote Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The in-memory session store (leads, team, catalog, pricing)
//! - The static-credential authenticator
//! - Demo seed data
//! - Log-only proposal and export hooks
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `solarquote-core`
//! - Contains all "impure" code (wall clock, environment, files)

pub mod auth;
pub mod clock;
pub mod config;
pub mod hooks;
pub mod seed;
pub mod store;

// Re-export commonly used items
pub use auth::StaticAuthenticator;
pub use clock::SystemClock;
pub use hooks::{LoggingDocumentExporter, LoggingProposalSender};
pub use store::SessionStore;
