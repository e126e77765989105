//! Mock repository implementations for testing
//!
//! In-memory mocks for the core store ports backed by `std::sync::Mutex`.

use std::sync::Mutex;

use solarquote_core::{CatalogRepository, LeadRepository, SalespersonRepository};
use solarquote_domain::{
    HardwareItem, Lead, PricingRule, PricingRules, Result as DomainResult, Salesperson,
    SolarQuoteError,
};

/// In-memory mock for `LeadRepository`.
#[derive(Default)]
pub struct MockLeadRepository {
    leads: Mutex<Vec<Lead>>,
}

impl MockLeadRepository {
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads: Mutex::new(leads) }
    }

    pub fn snapshot(&self) -> Vec<Lead> {
        self.leads.lock().expect("lock poisoned").clone()
    }
}

impl LeadRepository for MockLeadRepository {
    fn list_leads(&self) -> DomainResult<Vec<Lead>> {
        Ok(self.snapshot())
    }

    fn get_lead(&self, id: &str) -> DomainResult<Option<Lead>> {
        Ok(self.snapshot().into_iter().find(|lead| lead.id == id))
    }

    fn insert_lead(&self, lead: Lead) -> DomainResult<()> {
        self.leads.lock().expect("lock poisoned").push(lead);
        Ok(())
    }

    fn update_lead(&self, lead: Lead) -> DomainResult<()> {
        let mut guard = self.leads.lock().expect("lock poisoned");
        let slot = guard
            .iter_mut()
            .find(|existing| existing.id == lead.id)
            .ok_or_else(|| SolarQuoteError::NotFound(format!("lead {}", lead.id)))?;
        *slot = lead;
        Ok(())
    }
}

/// In-memory mock for `SalespersonRepository`.
#[derive(Default)]
pub struct MockSalespersonRepository {
    team: Mutex<Vec<Salesperson>>,
}

impl MockSalespersonRepository {
    pub fn new(team: Vec<Salesperson>) -> Self {
        Self { team: Mutex::new(team) }
    }
}

impl SalespersonRepository for MockSalespersonRepository {
    fn list_salespeople(&self) -> DomainResult<Vec<Salesperson>> {
        Ok(self.team.lock().expect("lock poisoned").clone())
    }

    fn get_salesperson(&self, id: &str) -> DomainResult<Option<Salesperson>> {
        Ok(self.team.lock().expect("lock poisoned").iter().find(|sp| sp.id == id).cloned())
    }

    fn upsert_salesperson(&self, salesperson: Salesperson) -> DomainResult<()> {
        let mut guard = self.team.lock().expect("lock poisoned");
        match guard.iter_mut().find(|sp| sp.id == salesperson.id) {
            Some(slot) => *slot = salesperson,
            None => guard.push(salesperson),
        }
        Ok(())
    }
}

/// In-memory mock for `CatalogRepository`.
pub struct MockCatalogRepository {
    items: Mutex<Vec<HardwareItem>>,
    rules: Mutex<PricingRules>,
}

impl MockCatalogRepository {
    pub fn new(items: Vec<HardwareItem>, rules: PricingRules) -> Self {
        Self { items: Mutex::new(items), rules: Mutex::new(rules) }
    }
}

impl CatalogRepository for MockCatalogRepository {
    fn list_hardware(&self) -> DomainResult<Vec<HardwareItem>> {
        Ok(self.items.lock().expect("lock poisoned").clone())
    }

    fn upsert_hardware_item(&self, item: HardwareItem) -> DomainResult<()> {
        let mut guard = self.items.lock().expect("lock poisoned");
        match guard.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => *slot = item,
            None => guard.push(item),
        }
        Ok(())
    }

    fn delete_hardware_item(&self, id: &str) -> DomainResult<bool> {
        let mut guard = self.items.lock().expect("lock poisoned");
        let before = guard.len();
        guard.retain(|item| item.id != id);
        Ok(guard.len() != before)
    }

    fn pricing_rules(&self) -> DomainResult<PricingRules> {
        Ok(*self.rules.lock().expect("lock poisoned"))
    }

    fn set_pricing_rule(&self, rule: PricingRule, value: f64) -> DomainResult<()> {
        let mut guard = self.rules.lock().expect("lock poisoned");
        *guard = guard.with(rule, value);
        Ok(())
    }
}
