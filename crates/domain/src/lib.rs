//! # SolarQuote Domain
//!
//! Business domain types and models for SolarQuote.
//!
//! This crate contains:
//! - Catalog types (hardware items, pricing rules)
//! - Quotation configuration and the calculator's result contract
//! - Leads, salespeople, roles and sessions
//! - Domain error types and Result definitions
//! - Configuration structures and domain constants
//!
//! ## Architecture
//! - No dependencies on other SolarQuote crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
