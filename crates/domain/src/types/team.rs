//! Sales team members

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// A member of the sales team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Salesperson {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub active: bool,
    pub sales_target: f64,
    pub total_sales: f64,
    pub leads_assigned: u32,
}

impl Salesperson {
    /// Sales achieved as a percentage of target (0 when no target is set).
    pub fn achievement_percent(&self) -> f64 {
        if self.sales_target > 0.0 {
            self.total_sales / self.sales_target * 100.0
        } else {
            0.0
        }
    }
}

/// Raw add/edit salesperson form input
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct SalespersonForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub sales_target: String,
}
