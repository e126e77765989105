//! Lead pipeline: intake, filtering, quotation save and assignment

pub mod filter;
pub mod intake;
pub mod ports;
pub mod save;
pub mod service;

pub use filter::{DateRange, LeadFilter};
pub use intake::{validate_new_lead, LeadDraft};
pub use ports::LeadRepository;
pub use save::apply_quotation;
pub use service::{LeadService, SavedQuotation};
