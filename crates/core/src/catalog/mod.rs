//! Hardware inventory and pricing rules

pub mod ports;
pub mod service;

pub use ports::CatalogRepository;
pub use service::{validate_hardware_draft, validate_hardware_edit, CatalogService};
