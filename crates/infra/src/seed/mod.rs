//! Demo records for a fresh session

pub mod demo;

pub use demo::{demo_catalog, demo_leads, demo_pricing, demo_snapshot, demo_team};
