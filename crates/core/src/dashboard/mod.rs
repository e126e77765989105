//! Dashboard overviews for each role

pub mod stats;

pub use stats::{team_workload, AdminStats, SalespersonStats, SalespersonWorkload};
