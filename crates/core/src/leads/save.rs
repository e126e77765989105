//! Lead record update on quotation save

use chrono::NaiveDate;
use solarquote_domain::{Lead, LeadStatus, QuotationResult};

/// Bind a computed quotation and the chosen status into an updated lead.
///
/// Only `system_size`, `quote_value`, `status` and `last_activity` change.
/// Identical inputs on the same date produce identical records.
pub fn apply_quotation(
    lead: &Lead,
    quotation: &QuotationResult,
    status: LeadStatus,
    today: NaiveDate,
) -> Lead {
    Lead {
        system_size: quotation.system_size_kw,
        quote_value: quotation.total_project_cost,
        status,
        last_activity: today,
        ..lead.clone()
    }
}
