//! Sales team management

pub mod ports;
pub mod service;

pub use ports::SalespersonRepository;
pub use service::{validate_salesperson_form, SalespersonDetails, TeamService};
