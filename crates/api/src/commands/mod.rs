//! Commands - the surface the dashboards call into
//!
//! Every command is async, logs its outcome and returns the domain
//! `Result`.

mod admin;
mod auth;
mod leads;
mod quotation;

pub use admin::*;
pub use auth::*;
pub use leads::*;
pub use quotation::*;
