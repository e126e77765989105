//! Team service - roster management for administrators

use std::sync::Arc;

use solarquote_common::validation::{
    AmountValidator, EmailValidator, ValidationResult, Validator,
};
use solarquote_domain::constants::{DEFAULT_SALES_TARGET, SALESPERSON_ID_PREFIX};
use solarquote_domain::{Result, Salesperson, SalespersonForm, SolarQuoteError};
use tracing::info;
use uuid::Uuid;

use super::ports::SalespersonRepository;
use crate::validation::into_domain_error;

/// Form key for the name input
pub const FIELD_NAME: &str = "name";
/// Form key for the email input
pub const FIELD_EMAIL: &str = "email";
/// Form key for the sales target input
pub const FIELD_SALES_TARGET: &str = "salesTarget";

/// Validated salesperson form
#[derive(Debug, Clone, PartialEq)]
pub struct SalespersonDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub sales_target: f64,
}

/// Validate an add/edit form. A blank target falls back to the default.
pub fn validate_salesperson_form(form: &SalespersonForm) -> ValidationResult<SalespersonDetails> {
    let mut validator = Validator::new();

    validator.validate_not_empty(FIELD_NAME, &form.name, "Name is required");
    validator
        .validate_not_empty(FIELD_EMAIL, &form.email, "Email is required")
        .validate_field_with_message(
            FIELD_EMAIL,
            form.email.trim(),
            &EmailValidator::new(),
            "Enter a valid email address",
        );

    let sales_target = if form.sales_target.trim().is_empty() {
        Some(DEFAULT_SALES_TARGET)
    } else {
        AmountValidator::positive().parse(&form.sales_target)
    };
    if sales_target.is_none() {
        validator.add_error(FIELD_SALES_TARGET, "Enter a valid sales target");
    }

    validator.finalize()?;

    Ok(SalespersonDetails {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        sales_target: sales_target.unwrap_or(DEFAULT_SALES_TARGET),
    })
}

/// Sales team service
pub struct TeamService {
    team: Arc<dyn SalespersonRepository>,
}

impl TeamService {
    /// Service over the given roster store
    pub fn new(team: Arc<dyn SalespersonRepository>) -> Self {
        Self { team }
    }

    /// Everyone on the roster
    pub fn list(&self) -> Result<Vec<Salesperson>> {
        self.team.list_salespeople()
    }

    /// Salespeople who can take leads
    pub fn list_active(&self) -> Result<Vec<Salesperson>> {
        Ok(self.team.list_salespeople()?.into_iter().filter(|sp| sp.active).collect())
    }

    /// One salesperson by id
    pub fn get(&self, id: &str) -> Result<Salesperson> {
        self.team
            .get_salesperson(id)?
            .ok_or_else(|| SolarQuoteError::NotFound(format!("salesperson {id}")))
    }

    /// Add an active salesperson with no sales history.
    pub fn add(&self, form: &SalespersonForm) -> Result<Salesperson> {
        let details = validate_salesperson_form(form).map_err(into_domain_error)?;
        let salesperson = Salesperson {
            id: format!("{SALESPERSON_ID_PREFIX}-{}", Uuid::new_v4()),
            name: details.name,
            email: details.email,
            phone: details.phone,
            active: true,
            sales_target: details.sales_target,
            total_sales: 0.0,
            leads_assigned: 0,
        };

        self.team.upsert_salesperson(salesperson.clone())?;
        info!(salesperson_id = %salesperson.id, "Salesperson added");
        Ok(salesperson)
    }

    /// Edit contact details and target; sales history and status are kept.
    pub fn update(&self, id: &str, form: &SalespersonForm) -> Result<Salesperson> {
        let existing = self.get(id)?;
        let details = validate_salesperson_form(form).map_err(into_domain_error)?;
        let updated = Salesperson {
            name: details.name,
            email: details.email,
            phone: details.phone,
            sales_target: details.sales_target,
            ..existing
        };

        self.team.upsert_salesperson(updated.clone())?;
        info!(salesperson_id = id, "Salesperson updated");
        Ok(updated)
    }

    /// Flip the active flag and return the new record.
    pub fn toggle_active(&self, id: &str) -> Result<Salesperson> {
        let existing = self.get(id)?;
        let updated = Salesperson { active: !existing.active, ..existing };

        self.team.upsert_salesperson(updated.clone())?;
        info!(salesperson_id = id, active = updated.active, "Salesperson status changed");
        Ok(updated)
    }
}
