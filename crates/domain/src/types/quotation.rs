//! Quotation configuration and the calculator's result contract
//!
//! [`QuotationConfig`] is the mutable editing state of the quote builder.
//! Its setters keep every bound in place, so a configuration can never
//! describe more covered panels than installed ones.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::hardware::{HardwareItem, HardwareKind};
use crate::constants::{
    DEFAULT_PANEL_COUNT, DEFAULT_SCAFFOLDING_HEIGHT_M, MAX_PANEL_COUNT, MAX_SCAFFOLDING_HEIGHT_M,
    MIN_PANEL_COUNT, MIN_SCAFFOLDING_HEIGHT_M,
};

/// User-editable quotation inputs.
///
/// Hardware selections are ids into the catalog. An id that does not resolve
/// (or resolves to the wrong kind) contributes nothing to the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", from = "QuotationConfigRecord")]
pub struct QuotationConfig {
    panel_count: u32,
    panel_type: String,
    battery_backup: bool,
    battery_type: String,
    inverter_type: String,
    bird_net: bool,
    bird_net_panel_count: u32,
    scaffolding_required: bool,
    scaffolding_height: f64,
}

/// Unchecked wire form; converted through the same clamps as the setters.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuotationConfigRecord {
    panel_count: u32,
    panel_type: String,
    battery_backup: bool,
    battery_type: String,
    inverter_type: String,
    bird_net: bool,
    #[serde(default)]
    bird_net_panel_count: u32,
    scaffolding_required: bool,
    scaffolding_height: f64,
}

impl From<QuotationConfigRecord> for QuotationConfig {
    fn from(record: QuotationConfigRecord) -> Self {
        let mut config = Self {
            panel_count: DEFAULT_PANEL_COUNT,
            panel_type: record.panel_type,
            battery_backup: record.battery_backup,
            battery_type: record.battery_type,
            inverter_type: record.inverter_type,
            bird_net: record.bird_net,
            bird_net_panel_count: 0,
            scaffolding_required: record.scaffolding_required,
            scaffolding_height: DEFAULT_SCAFFOLDING_HEIGHT_M,
        };
        config.set_panel_count(record.panel_count);
        config.set_bird_net_panel_count(record.bird_net_panel_count);
        config.set_scaffolding_height(record.scaffolding_height);
        config
    }
}

impl QuotationConfig {
    /// Default editing state for a catalog: ten panels, the first item of
    /// each kind in catalog order and every add-on switched off.
    pub fn for_catalog(catalog: &[HardwareItem]) -> Self {
        let first_of = |kind: HardwareKind| {
            catalog.iter().find(|item| item.kind == kind).map(|item| item.id.clone()).unwrap_or_default()
        };

        Self {
            panel_count: DEFAULT_PANEL_COUNT,
            panel_type: first_of(HardwareKind::Panel),
            battery_backup: false,
            battery_type: first_of(HardwareKind::Battery),
            inverter_type: first_of(HardwareKind::Inverter),
            bird_net: false,
            bird_net_panel_count: 0,
            scaffolding_required: false,
            scaffolding_height: DEFAULT_SCAFFOLDING_HEIGHT_M,
        }
    }

    /// Panels on the roof, within [4, 40]
    pub fn panel_count(&self) -> u32 {
        self.panel_count
    }

    /// Selected panel id
    pub fn panel_type(&self) -> &str {
        &self.panel_type
    }

    /// Whether a battery is included
    pub fn battery_backup(&self) -> bool {
        self.battery_backup
    }

    /// Selected battery id, billed only with backup on
    pub fn battery_type(&self) -> &str {
        &self.battery_type
    }

    /// Selected inverter id
    pub fn inverter_type(&self) -> &str {
        &self.inverter_type
    }

    /// Whether bird netting is included
    pub fn bird_net(&self) -> bool {
        self.bird_net
    }

    /// Panels covered by bird netting, never above the panel count
    pub fn bird_net_panel_count(&self) -> u32 {
        self.bird_net_panel_count
    }

    /// Whether scaffolding is needed
    pub fn scaffolding_required(&self) -> bool {
        self.scaffolding_required
    }

    /// Scaffolding height in metres, within [2, 15]
    pub fn scaffolding_height(&self) -> f64 {
        self.scaffolding_height
    }

    /// Set the panel count, clamped to `[4, 40]`.
    ///
    /// Covered bird-net panels are pulled down when they would exceed the
    /// new count.
    pub fn set_panel_count(&mut self, count: u32) {
        self.panel_count = count.clamp(MIN_PANEL_COUNT, MAX_PANEL_COUNT);
        if self.bird_net_panel_count > self.panel_count {
            self.bird_net_panel_count = self.panel_count;
        }
    }

    /// Select a panel by id
    pub fn set_panel_type(&mut self, id: impl Into<String>) {
        self.panel_type = id.into();
    }

    /// Turn battery backup on or off
    pub fn set_battery_backup(&mut self, enabled: bool) {
        self.battery_backup = enabled;
    }

    /// Select a battery by id
    pub fn set_battery_type(&mut self, id: impl Into<String>) {
        self.battery_type = id.into();
    }

    /// Select an inverter by id
    pub fn set_inverter_type(&mut self, id: impl Into<String>) {
        self.inverter_type = id.into();
    }

    /// Switching bird net on covers every panel; switching it off uncovers all.
    pub fn set_bird_net(&mut self, enabled: bool) {
        self.bird_net = enabled;
        self.bird_net_panel_count = if enabled { self.panel_count } else { 0 };
    }

    /// Set the number of covered panels, clamped to `[0, panel_count]`.
    pub fn set_bird_net_panel_count(&mut self, count: u32) {
        self.bird_net_panel_count = count.min(self.panel_count);
    }

    /// Turn scaffolding on or off
    pub fn set_scaffolding_required(&mut self, required: bool) {
        self.scaffolding_required = required;
    }

    /// Set the scaffolding height in metres, clamped to `[2, 15]`.
    /// Non-finite input leaves the height unchanged.
    pub fn set_scaffolding_height(&mut self, meters: f64) {
        if meters.is_finite() {
            self.scaffolding_height = meters.clamp(MIN_SCAFFOLDING_HEIGHT_M, MAX_SCAFFOLDING_HEIGHT_M);
        }
    }
}

/// The seven priced terms of a quotation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub panel_cost: f64,
    pub battery_cost: f64,
    pub inverter_cost: f64,
    pub installation_cost: f64,
    pub labour_cost: f64,
    pub bird_net_cost: f64,
    pub scaffolding_cost: f64,
}

impl CostBreakdown {
    /// Sum of the seven cost terms
    pub fn total(&self) -> f64 {
        self.panel_cost
            + self.battery_cost
            + self.inverter_cost
            + self.installation_cost
            + self.labour_cost
            + self.bird_net_cost
            + self.scaffolding_cost
    }
}

/// Time for cumulative savings to cover the project cost.
///
/// `Undefined` when the system saves nothing (zero size), where the ratio
/// has no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Payback {
    Finite { months: f64, years: f64 },
    Undefined,
}

impl Payback {
    /// Months to break even, if defined
    pub fn months(&self) -> Option<f64> {
        match self {
            Self::Finite { months, .. } => Some(*months),
            Self::Undefined => None,
        }
    }

    /// Years to break even, if defined
    pub fn years(&self) -> Option<f64> {
        match self {
            Self::Finite { years, .. } => Some(*years),
            Self::Undefined => None,
        }
    }
}

/// Full calculator output: sizing, cost breakdown and financial projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct QuotationResult {
    pub system_size_kw: f64,
    pub labour_days: u32,
    pub breakdown: CostBreakdown,
    pub total_project_cost: f64,
    pub daily_generation_kwh: f64,
    pub monthly_generation_kwh: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub payback: Payback,
}

impl QuotationResult {
    /// Years to break even, if the system saves anything
    pub fn payback_years(&self) -> Option<f64> {
        self.payback.years()
    }
}
