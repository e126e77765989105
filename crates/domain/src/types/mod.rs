//! Domain types and models

pub mod hardware;
pub mod lead;
pub mod pricing;
pub mod quotation;
pub mod session;
pub mod team;

pub use hardware::{Dimensions, HardwareDraft, HardwareItem, HardwareKind};
pub use lead::{Lead, LeadStatus, NewLeadForm};
pub use pricing::{PricingRule, PricingRules};
pub use quotation::{CostBreakdown, Payback, QuotationConfig, QuotationResult};
pub use session::{Role, Session};
pub use team::{Salesperson, SalespersonForm};
