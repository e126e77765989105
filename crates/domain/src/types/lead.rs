//! Lead records and the sales pipeline

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::errors::SolarQuoteError;

/// Pipeline stage of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "kebab-case")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Quoted,
    Negotiating,
    ClosedWon,
    ClosedLost,
}

impl LeadStatus {
    /// Every status, in pipeline order
    pub const ALL: [Self; 6] = [
        Self::New,
        Self::Contacted,
        Self::Quoted,
        Self::Negotiating,
        Self::ClosedWon,
        Self::ClosedLost,
    ];

    /// Kebab-case wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Quoted => "quoted",
            Self::Negotiating => "negotiating",
            Self::ClosedWon => "closed-won",
            Self::ClosedLost => "closed-lost",
        }
    }

    /// Human label shown on badges and the status selector
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New Lead",
            Self::Contacted => "Contacted",
            Self::Quoted => "Quoted",
            Self::Negotiating => "Negotiating",
            Self::ClosedWon => "Won",
            Self::ClosedLost => "Lost",
        }
    }

    /// Won or lost; no further pipeline work.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::ClosedWon | Self::ClosedLost)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = SolarQuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| SolarQuoteError::InvalidInput(format!("unknown lead status: {s}")))
    }
}

/// A prospective customer tracked through the pipeline.
///
/// `system_size` and `quote_value` are snapshots of the last saved
/// quotation (zero until one is saved), not live derivations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub property_address: String,
    pub avg_monthly_bill: f64,
    pub status: LeadStatus,
    /// Salesperson id; `None` while waiting for assignment
    pub assigned_to: Option<String>,
    /// kW
    pub system_size: f64,
    pub quote_value: f64,
    pub last_activity: NaiveDate,
    pub created_at: NaiveDate,
}

impl Lead {
    /// Whether this salesperson owns the lead
    pub fn is_assigned_to(&self, salesperson_id: &str) -> bool {
        self.assigned_to.as_deref() == Some(salesperson_id)
    }

    /// No salesperson owns the lead yet
    pub fn is_unassigned(&self) -> bool {
        self.assigned_to.is_none()
    }
}

/// Raw new-lead form input, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase", default)]
pub struct NewLeadForm {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub property_address: String,
    pub avg_monthly_bill: String,
}
