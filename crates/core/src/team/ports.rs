//! Port interfaces for the sales team roster

use solarquote_domain::{Result, Salesperson};

/// Trait for salesperson persistence and retrieval
pub trait SalespersonRepository: Send + Sync {
    /// All salespeople in roster order
    fn list_salespeople(&self) -> Result<Vec<Salesperson>>;

    /// Get a salesperson by ID
    fn get_salesperson(&self, id: &str) -> Result<Option<Salesperson>>;

    /// Insert or replace by id
    fn upsert_salesperson(&self, salesperson: Salesperson) -> Result<()>;
}
