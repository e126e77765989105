//! # SolarQuote App
//!
//! Application layer - commands and entry point.
//!
//! This crate contains:
//! - Commands (dashboard → backend bridge)
//! - Application context (dependency injection)
//! - Logging bootstrap
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
