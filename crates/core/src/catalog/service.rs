//! Catalog service - hardware inventory and pricing administration

use std::sync::Arc;

use solarquote_common::validation::{AmountValidator, ValidationResult, Validator};
use solarquote_domain::{
    HardwareDraft, HardwareItem, HardwareKind, PricingRule, PricingRules, Result, SolarQuoteError,
};
use tracing::info;
use uuid::Uuid;

use super::ports::CatalogRepository;
use crate::validation::into_domain_error;

/// Form key for the brand input
pub const FIELD_BRAND: &str = "brand";
/// Form key for the model input
pub const FIELD_MODEL: &str = "model";
/// Form key for the capacity input
pub const FIELD_CAPACITY: &str = "capacity";
/// Form key for the price input
pub const FIELD_PRICE: &str = "price";

/// Check an admin-entered hardware item before it joins the catalog.
/// Capacity and price must both be greater than zero.
pub fn validate_hardware_draft(draft: &HardwareDraft) -> ValidationResult<()> {
    check_hardware(
        draft,
        AmountValidator::positive(),
        "Capacity must be greater than 0",
        "Price must be greater than 0",
    )
}

/// Check an inline edit of an existing item. Zero capacity or price is
/// accepted; negative and non-finite figures are not.
pub fn validate_hardware_edit(draft: &HardwareDraft) -> ValidationResult<()> {
    check_hardware(
        draft,
        AmountValidator::non_negative(),
        "Capacity cannot be negative",
        "Price cannot be negative",
    )
}

fn check_hardware(
    draft: &HardwareDraft,
    amount: AmountValidator,
    capacity_message: &str,
    price_message: &str,
) -> ValidationResult<()> {
    let mut validator = Validator::new();

    validator
        .validate_not_empty(FIELD_BRAND, &draft.brand, "Brand is required")
        .validate_not_empty(FIELD_MODEL, &draft.model, "Model is required")
        .validate_field_with_message(FIELD_CAPACITY, &draft.capacity, &amount, capacity_message)
        .validate_field_with_message(FIELD_PRICE, &draft.price, &amount, price_message);

    validator.finalize()
}

/// Inventory and pricing service
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    /// Service over the given catalog store
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    /// Every item, in catalog order
    pub fn list(&self) -> Result<Vec<HardwareItem>> {
        self.catalog.list_hardware()
    }

    /// Items of one kind, in catalog order
    pub fn list_by_kind(&self, kind: HardwareKind) -> Result<Vec<HardwareItem>> {
        Ok(self.catalog.list_hardware()?.into_iter().filter(|item| item.kind == kind).collect())
    }

    /// Validate and append a new item with a `<kind>-<uuid>` id.
    pub fn add_item(&self, kind: HardwareKind, draft: HardwareDraft) -> Result<HardwareItem> {
        validate_hardware_draft(&draft).map_err(into_domain_error)?;
        let item = draft.into_item(format!("{}-{}", kind.as_str(), Uuid::new_v4()), kind);

        self.catalog.upsert_hardware_item(item.clone())?;
        info!(item_id = %item.id, kind = %kind, "Hardware item added");
        Ok(item)
    }

    /// Replace an existing item's details, keeping its id and kind.
    pub fn update_item(&self, id: &str, draft: HardwareDraft) -> Result<HardwareItem> {
        let existing = self
            .catalog
            .list_hardware()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| SolarQuoteError::NotFound(format!("hardware item {id}")))?;
        validate_hardware_edit(&draft).map_err(into_domain_error)?;
        let item = draft.into_item(existing.id, existing.kind);

        self.catalog.upsert_hardware_item(item.clone())?;
        info!(item_id = id, "Hardware item updated");
        Ok(item)
    }

    /// Remove an item; unknown ids are `NotFound`.
    pub fn delete_item(&self, id: &str) -> Result<()> {
        if !self.catalog.delete_hardware_item(id)? {
            return Err(SolarQuoteError::NotFound(format!("hardware item {id}")));
        }
        info!(item_id = id, "Hardware item deleted");
        Ok(())
    }

    /// Current pricing rates
    pub fn pricing_rules(&self) -> Result<PricingRules> {
        self.catalog.pricing_rules()
    }

    /// Update one rate. Negative or non-finite values are rejected.
    pub fn set_pricing_rule(&self, rule: PricingRule, value: f64) -> Result<PricingRules> {
        if !value.is_finite() || value < 0.0 {
            return Err(SolarQuoteError::InvalidInput(format!(
                "pricing rule {rule:?} must be a non-negative number, got {value}"
            )));
        }
        self.catalog.set_pricing_rule(rule, value)?;
        info!(rule = ?rule, value, "Pricing rule updated");
        self.catalog.pricing_rules()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_every_field() {
        let err = validate_hardware_draft(&HardwareDraft::default()).expect_err("draft is empty");
        assert_eq!(err.error_count(), 4);
        assert_eq!(err.message_for(FIELD_PRICE), Some("Price must be greater than 0"));
    }

    #[test]
    fn complete_draft_passes() {
        let draft = HardwareDraft {
            brand: "Luminous".into(),
            model: "NXG 5kVA".into(),
            capacity: 5.0,
            price: 45_000.0,
            ..HardwareDraft::default()
        };
        assert!(validate_hardware_draft(&draft).is_ok());
    }

    #[test]
    fn edits_accept_zero_but_not_negative_figures() {
        let free = HardwareDraft {
            brand: "Tata".into(),
            model: "TP400".into(),
            capacity: 400.0,
            price: 0.0,
            ..HardwareDraft::default()
        };
        assert!(validate_hardware_edit(&free).is_ok());
        assert!(validate_hardware_draft(&free).is_err());

        let broken = HardwareDraft { capacity: -1.0, price: f64::NAN, ..free };
        let err = validate_hardware_edit(&broken).expect_err("negative capacity");
        assert_eq!(err.message_for(FIELD_CAPACITY), Some("Capacity cannot be negative"));
        assert_eq!(err.message_for(FIELD_PRICE), Some("Price cannot be negative"));
    }
}
