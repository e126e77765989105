//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Quotation bounds
/// Fewest panels a quotation may use
pub const MIN_PANEL_COUNT: u32 = 4;
/// Most panels a quotation may use
pub const MAX_PANEL_COUNT: u32 = 40;
/// Panel count on a fresh quotation
pub const DEFAULT_PANEL_COUNT: u32 = 10;
/// Lowest scaffolding height, in metres
pub const MIN_SCAFFOLDING_HEIGHT_M: f64 = 2.0;
/// Highest scaffolding height, in metres
pub const MAX_SCAFFOLDING_HEIGHT_M: f64 = 15.0;
/// Scaffolding height on a fresh quotation
pub const DEFAULT_SCAFFOLDING_HEIGHT_M: f64 = 3.0;

// Generation and tariff assumptions
/// Panel capacities are in watts
pub const WATTS_PER_KW: f64 = 1000.0;
/// Equivalent full-sun hours per day
pub const GENERATION_HOURS_PER_DAY: f64 = 4.5;
/// Billing month length
pub const DAYS_PER_MONTH: f64 = 30.0;
/// Months per year
pub const MONTHS_PER_YEAR: f64 = 12.0;
/// Grid tariff saved per generated kWh
pub const TARIFF_PER_KWH: f64 = 8.0;

// Labour is billed in whole days, one day per this many kW
/// System size covered by one labour day
pub const KW_PER_LABOUR_DAY: f64 = 2.0;

// Sales team
/// Target for a salesperson added without one
pub const DEFAULT_SALES_TARGET: f64 = 500_000.0;

// Id prefixes
/// Prefix of generated lead ids
pub const LEAD_ID_PREFIX: &str = "lead";
/// Prefix of generated salesperson ids
pub const SALESPERSON_ID_PREFIX: &str = "sp";

// User-facing notices
/// Notice shown after a quotation is saved
pub const SAVE_SUCCESS_MESSAGE: &str = "Quotation saved successfully!";
/// Shown when a login attempt fails
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

/// Shown when the identity provider has no password-less demo login
pub const QUICK_LOGIN_UNAVAILABLE_MESSAGE: &str = "Quick login is not available";
