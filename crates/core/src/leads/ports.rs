//! Port interfaces for lead storage
//!
//! The session store owns the lead collection; core services read and write
//! it only through this trait.

use solarquote_domain::{Lead, Result};

/// Trait for lead persistence and retrieval
pub trait LeadRepository: Send + Sync {
    /// All leads in insertion order
    fn list_leads(&self) -> Result<Vec<Lead>>;

    /// Get a lead by ID
    fn get_lead(&self, id: &str) -> Result<Option<Lead>>;

    /// Append a new lead
    fn insert_lead(&self, lead: Lead) -> Result<()>;

    /// Replace an existing lead (last writer wins).
    ///
    /// Returns `NotFound` when no lead has the same id.
    fn update_lead(&self, lead: Lead) -> Result<()>;
}
