//! # SolarQuote Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The quotation calculator and lead save flow
//! - Port interfaces (traits) for the session store, credentials and
//!   outbound proposal hooks
//! - Lead, team and catalog services
//!
//! ## Architecture Principles
//! - Only depends on `solarquote-common` and `solarquote-domain`
//! - No storage, HTTP, or UI code
//! - All external collaborators via traits

pub mod auth;
pub mod catalog;
pub mod clock;
pub mod dashboard;
pub mod leads;
pub mod quotation;
pub mod team;
pub mod validation;

pub use auth::Authenticator;
pub use catalog::{CatalogRepository, CatalogService};
pub use clock::{Clock, FixedClock};
pub use dashboard::{team_workload, AdminStats, SalespersonStats, SalespersonWorkload};
pub use leads::{
    apply_quotation, DateRange, LeadDraft, LeadFilter, LeadRepository, LeadService,
    SavedQuotation,
};
pub use quotation::{calculate, DocumentExporter, ProposalChannel, ProposalSender};
pub use team::{SalespersonRepository, TeamService};
