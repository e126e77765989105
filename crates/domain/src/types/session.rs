//! Roles and authenticated sessions

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// Which dashboard a signed-in user gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Salesperson,
}

impl Role {
    /// Lowercase wire name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Salesperson => "salesperson",
        }
    }
}

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub email: String,
    pub role: Role,
    pub display_name: String,
    /// Team member backing a salesperson session
    pub salesperson_id: Option<String>,
}

impl Session {
    /// Whether this session has admin rights
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
