//! In-memory session store
//!
//! Holds leads, salespeople, hardware and pricing rules behind a single
//! `RwLock`. Writers replace whole records; the last write wins.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use solarquote_core::{CatalogRepository, LeadRepository, SalespersonRepository};
use solarquote_domain::{
    HardwareItem, Lead, PricingRule, PricingRules, Result, Salesperson, SolarQuoteError,
};
use tracing::debug;

/// Every collection owned by a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub leads: Vec<Lead>,
    pub salespeople: Vec<Salesperson>,
    pub hardware: Vec<HardwareItem>,
    pub pricing: PricingRules,
}

impl SessionSnapshot {
    /// No records and all rates at zero
    pub fn empty() -> Self {
        Self {
            leads: Vec::new(),
            salespeople: Vec::new(),
            hardware: Vec::new(),
            pricing: PricingRules {
                base_installation_rate: 0.0,
                labour_cost_per_day: 0.0,
                scaffolding_cost_per_meter: 0.0,
                bird_net_cost_per_panel: 0.0,
            },
        }
    }
}

/// Session-scoped store implementing the lead, team and catalog ports
#[derive(Debug)]
pub struct SessionStore {
    state: RwLock<SessionSnapshot>,
}

impl SessionStore {
    /// Store holding the given records
    pub fn new(snapshot: SessionSnapshot) -> Self {
        Self { state: RwLock::new(snapshot) }
    }

    /// Store with no records and zeroed rates
    pub fn empty() -> Self {
        Self::new(SessionSnapshot::empty())
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.read().clone()
    }
}

impl LeadRepository for SessionStore {
    fn list_leads(&self) -> Result<Vec<Lead>> {
        Ok(self.state.read().leads.clone())
    }

    fn get_lead(&self, id: &str) -> Result<Option<Lead>> {
        Ok(self.state.read().leads.iter().find(|lead| lead.id == id).cloned())
    }

    fn insert_lead(&self, lead: Lead) -> Result<()> {
        let mut state = self.state.write();
        if state.leads.iter().any(|existing| existing.id == lead.id) {
            return Err(SolarQuoteError::InvalidInput(format!("lead {} already exists", lead.id)));
        }
        debug!(lead_id = %lead.id, "Inserting lead");
        state.leads.push(lead);
        Ok(())
    }

    fn update_lead(&self, lead: Lead) -> Result<()> {
        let mut state = self.state.write();
        let slot = state
            .leads
            .iter_mut()
            .find(|existing| existing.id == lead.id)
            .ok_or_else(|| SolarQuoteError::NotFound(format!("lead {}", lead.id)))?;
        debug!(lead_id = %lead.id, "Updating lead");
        *slot = lead;
        Ok(())
    }
}

impl SalespersonRepository for SessionStore {
    fn list_salespeople(&self) -> Result<Vec<Salesperson>> {
        Ok(self.state.read().salespeople.clone())
    }

    fn get_salesperson(&self, id: &str) -> Result<Option<Salesperson>> {
        Ok(self.state.read().salespeople.iter().find(|sp| sp.id == id).cloned())
    }

    fn upsert_salesperson(&self, salesperson: Salesperson) -> Result<()> {
        let mut state = self.state.write();
        match state.salespeople.iter_mut().find(|sp| sp.id == salesperson.id) {
            Some(slot) => *slot = salesperson,
            None => state.salespeople.push(salesperson),
        }
        Ok(())
    }
}

impl CatalogRepository for SessionStore {
    fn list_hardware(&self) -> Result<Vec<HardwareItem>> {
        Ok(self.state.read().hardware.clone())
    }

    fn upsert_hardware_item(&self, item: HardwareItem) -> Result<()> {
        let mut state = self.state.write();
        match state.hardware.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => *slot = item,
            None => state.hardware.push(item),
        }
        Ok(())
    }

    fn delete_hardware_item(&self, id: &str) -> Result<bool> {
        let mut state = self.state.write();
        let before = state.hardware.len();
        state.hardware.retain(|item| item.id != id);
        Ok(state.hardware.len() != before)
    }

    fn pricing_rules(&self) -> Result<PricingRules> {
        Ok(self.state.read().pricing)
    }

    fn set_pricing_rule(&self, rule: PricingRule, value: f64) -> Result<()> {
        let mut state = self.state.write();
        state.pricing = state.pricing.with(rule, value);
        Ok(())
    }
}
