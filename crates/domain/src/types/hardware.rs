//! Hardware catalog types
//!
//! Panels, batteries and inverters offered on quotations. Items are
//! immutable reference data for the duration of one calculation.

use std::fmt;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Kind of hardware item.
///
/// The unit of [`HardwareItem::capacity`] depends on the kind: watts for
/// panels, kWh for batteries and kW for inverters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum HardwareKind {
    Panel,
    Battery,
    Inverter,
}

impl HardwareKind {
    /// Every kind, in catalog display order
    pub const ALL: [Self; 3] = [Self::Panel, Self::Battery, Self::Inverter];

    /// Wire name, also used as the id prefix for new items.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Panel => "panel",
            Self::Battery => "battery",
            Self::Inverter => "inverter",
        }
    }

    /// Unit of the capacity figure for this kind.
    pub fn capacity_unit(self) -> &'static str {
        match self {
            Self::Panel => "W",
            Self::Battery => "kWh",
            Self::Inverter => "kW",
        }
    }
}

impl fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical dimensions in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A catalog entry that can be selected on a quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct HardwareItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: HardwareKind,
    pub brand: String,
    pub model: String,
    pub capacity: f64,
    pub price: f64,
    #[serde(default)]
    pub dimensions: Dimensions,
}

impl HardwareItem {
    /// "Brand Model" label used in dropdowns and proposals.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Capacity with its unit, e.g. `400 W`.
    pub fn capacity_label(&self) -> String {
        format!("{} {}", self.capacity, self.kind.capacity_unit())
    }
}

/// Admin input for a new catalog entry; the id is assigned on creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct HardwareDraft {
    pub brand: String,
    pub model: String,
    pub capacity: f64,
    pub price: f64,
    pub dimensions: Dimensions,
}

impl HardwareDraft {
    /// Materialise the draft under the given id.
    pub fn into_item(self, id: String, kind: HardwareKind) -> HardwareItem {
        HardwareItem {
            id,
            kind,
            brand: self.brand.trim().to_string(),
            model: self.model.trim().to_string(),
            capacity: self.capacity,
            price: self.price,
            dimensions: self.dimensions,
        }
    }
}
