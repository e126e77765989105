//! New-lead form validation
//!
//! Checks are local and field-scoped. A rejected form yields one message
//! per invalid field and never reaches the store.

use chrono::NaiveDate;
use solarquote_common::validation::{
    AmountValidator, EmailValidator, PhoneValidator, ValidationResult, Validator,
};
use solarquote_domain::{Lead, LeadStatus, NewLeadForm};

/// Form key for the customer name
pub const FIELD_CUSTOMER_NAME: &str = "customerName";
/// Form key for the optional email
pub const FIELD_EMAIL: &str = "email";
/// Form key for the phone number
pub const FIELD_PHONE: &str = "phone";
/// Form key for the property address
pub const FIELD_PROPERTY_ADDRESS: &str = "propertyAddress";
/// Form key for the average monthly bill
pub const FIELD_AVG_MONTHLY_BILL: &str = "avgMonthlyBill";

/// A new-lead form that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub property_address: String,
    pub avg_monthly_bill: f64,
}

impl LeadDraft {
    /// Build the stored record: status `new`, no quotation yet.
    pub fn into_lead(self, id: String, assigned_to: Option<String>, today: NaiveDate) -> Lead {
        Lead {
            id,
            customer_name: self.customer_name,
            email: self.email,
            phone: self.phone,
            property_address: self.property_address,
            avg_monthly_bill: self.avg_monthly_bill,
            status: LeadStatus::New,
            assigned_to,
            system_size: 0.0,
            quote_value: 0.0,
            last_activity: today,
            created_at: today,
        }
    }
}

/// Validate a submitted form.
pub fn validate_new_lead(form: &NewLeadForm) -> ValidationResult<LeadDraft> {
    let amount = AmountValidator::positive();
    let mut validator = Validator::new();

    validator.validate_not_empty(FIELD_CUSTOMER_NAME, &form.customer_name, "Customer name is required");

    validator
        .validate_not_empty(FIELD_PHONE, &form.phone, "Phone number is required")
        .validate_field_with_message(
            FIELD_PHONE,
            form.phone.as_str(),
            &PhoneValidator::new(),
            "Enter a valid phone number",
        );

    // Email is optional; only a non-empty value is checked.
    if !form.email.is_empty() {
        validator.validate_field_with_message(
            FIELD_EMAIL,
            form.email.as_str(),
            &EmailValidator::new(),
            "Enter a valid email address",
        );
    }

    validator.validate_not_empty(
        FIELD_PROPERTY_ADDRESS,
        &form.property_address,
        "Property address is required",
    );

    let bill = amount.parse(&form.avg_monthly_bill);
    if bill.is_none() {
        validator.add_error(FIELD_AVG_MONTHLY_BILL, "Enter a valid monthly bill amount");
    }

    validator.finalize()?;

    Ok(LeadDraft {
        customer_name: form.customer_name.trim().to_string(),
        email: form.email.trim().to_string(),
        phone: form.phone.trim().to_string(),
        property_address: form.property_address.trim().to_string(),
        avg_monthly_bill: bill.unwrap_or_default(),
    })
}
