//! Lead service - pipeline use cases over the session store

use std::sync::Arc;

use solarquote_domain::constants::LEAD_ID_PREFIX;
use solarquote_domain::{
    Lead, LeadStatus, NewLeadForm, QuotationConfig, QuotationResult, Result, Salesperson,
    SolarQuoteError,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::filter::LeadFilter;
use super::intake::validate_new_lead;
use super::ports::LeadRepository;
use super::save::apply_quotation;
use crate::catalog::ports::CatalogRepository;
use crate::clock::Clock;
use crate::quotation::calculator;
use crate::team::ports::SalespersonRepository;
use crate::validation::into_domain_error;

/// Outcome of a quotation save
#[derive(Debug, Clone, PartialEq)]
pub struct SavedQuotation {
    pub lead: Lead,
    pub quotation: QuotationResult,
}

/// Lead pipeline service
pub struct LeadService {
    leads: Arc<dyn LeadRepository>,
    catalog: Arc<dyn CatalogRepository>,
    team: Arc<dyn SalespersonRepository>,
    clock: Arc<dyn Clock>,
}

impl LeadService {
    /// Wire the service to its stores and clock.
    pub fn new(
        leads: Arc<dyn LeadRepository>,
        catalog: Arc<dyn CatalogRepository>,
        team: Arc<dyn SalespersonRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { leads, catalog, team, clock }
    }

    /// Every lead, in store order.
    pub fn list_all(&self) -> Result<Vec<Lead>> {
        self.leads.list_leads()
    }

    /// Leads assigned to one salesperson, in store order
    pub fn list_for_salesperson(&self, salesperson_id: &str) -> Result<Vec<Lead>> {
        Ok(self
            .leads
            .list_leads()?
            .into_iter()
            .filter(|lead| lead.is_assigned_to(salesperson_id))
            .collect())
    }

    /// Apply a filter to the full lead set, relative to today's date.
    pub fn filter(&self, filter: &LeadFilter) -> Result<Vec<Lead>> {
        let leads = self.leads.list_leads()?;
        Ok(filter.apply(&leads, self.clock.today()))
    }

    /// One lead by id; unknown ids are `NotFound`.
    pub fn get(&self, id: &str) -> Result<Lead> {
        self.leads
            .get_lead(id)?
            .ok_or_else(|| SolarQuoteError::NotFound(format!("lead {id}")))
    }

    /// Validate the form and append a fresh `new` lead.
    pub fn create_lead(&self, form: &NewLeadForm, assigned_to: Option<String>) -> Result<Lead> {
        let draft = validate_new_lead(form).map_err(into_domain_error)?;
        let id = format!("{LEAD_ID_PREFIX}-{}", Uuid::new_v4());
        let lead = draft.into_lead(id, assigned_to, self.clock.today());

        self.leads.insert_lead(lead.clone())?;
        info!(lead_id = %lead.id, assigned_to = ?lead.assigned_to, "Lead created");
        Ok(lead)
    }

    /// Price a configuration against the current catalog and rules.
    pub fn preview_quotation(&self, config: &QuotationConfig) -> Result<QuotationResult> {
        let catalog = self.catalog.list_hardware()?;
        let rules = self.catalog.pricing_rules()?;
        Ok(calculator::calculate(config, &rules, &catalog))
    }

    /// Recompute the quotation and write it onto the lead with the chosen status.
    pub fn save_quotation(
        &self,
        lead_id: &str,
        config: &QuotationConfig,
        status: LeadStatus,
    ) -> Result<SavedQuotation> {
        let lead = self.get(lead_id)?;
        let quotation = self.preview_quotation(config)?;
        let updated = apply_quotation(&lead, &quotation, status, self.clock.today());

        self.leads.update_lead(updated.clone())?;
        info!(
            lead_id,
            status = %status,
            system_size_kw = quotation.system_size_kw,
            quote_value = quotation.total_project_cost,
            "Quotation saved"
        );
        Ok(SavedQuotation { lead: updated, quotation })
    }

    /// Give an unassigned lead to an active salesperson.
    pub fn assign_lead(&self, lead_id: &str, salesperson_id: &str) -> Result<Lead> {
        let lead = self.get(lead_id)?;
        if let Some(current) = &lead.assigned_to {
            return Err(SolarQuoteError::InvalidInput(format!(
                "lead {lead_id} is already assigned to {current}"
            )));
        }
        self.set_assignee(lead, salesperson_id)
    }

    /// Move an assigned lead to another active salesperson.
    pub fn reassign_lead(&self, lead_id: &str, salesperson_id: &str) -> Result<Lead> {
        let lead = self.get(lead_id)?;
        if lead.is_unassigned() {
            return Err(SolarQuoteError::InvalidInput(format!("lead {lead_id} is not assigned")));
        }
        self.set_assignee(lead, salesperson_id)
    }

    fn set_assignee(&self, lead: Lead, salesperson_id: &str) -> Result<Lead> {
        let salesperson = self.active_salesperson(salesperson_id)?;
        let previous = lead.assigned_to.clone();
        let updated = Lead { assigned_to: Some(salesperson.id), ..lead };

        self.leads.update_lead(updated.clone())?;
        info!(
            lead_id = %updated.id,
            from = ?previous,
            to = ?updated.assigned_to,
            "Lead assignment changed"
        );
        Ok(updated)
    }

    fn active_salesperson(&self, id: &str) -> Result<Salesperson> {
        let salesperson = self
            .team
            .get_salesperson(id)?
            .ok_or_else(|| SolarQuoteError::NotFound(format!("salesperson {id}")))?;
        if !salesperson.active {
            debug!(salesperson_id = id, "Rejected assignment to inactive salesperson");
            return Err(SolarQuoteError::InvalidInput(format!("salesperson {id} is inactive")));
        }
        Ok(salesperson)
    }
}
