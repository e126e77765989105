//! Port interfaces for the hardware catalog and pricing rules

use solarquote_domain::{HardwareItem, PricingRule, PricingRules, Result};

/// Trait for catalog persistence and retrieval
pub trait CatalogRepository: Send + Sync {
    /// All hardware items in catalog order
    fn list_hardware(&self) -> Result<Vec<HardwareItem>>;

    /// Insert or replace by id. New items are appended.
    fn upsert_hardware_item(&self, item: HardwareItem) -> Result<()>;

    /// Remove an item. Returns `false` when the id was unknown.
    fn delete_hardware_item(&self, id: &str) -> Result<bool>;

    /// Current pricing rates
    fn pricing_rules(&self) -> Result<PricingRules>;

    /// Overwrite one rate
    fn set_pricing_rule(&self, rule: PricingRule, value: f64) -> Result<()>;
}
