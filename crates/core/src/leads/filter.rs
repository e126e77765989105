//! Lead list filtering
//!
//! A filter is a conjunction of predicates evaluated against the full
//! record set on every change. Filtering is stable: matching leads keep
//! their original order.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use solarquote_domain::{Lead, LeadStatus};

/// Last-activity bucket relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    #[default]
    All,
    Today,
    /// Last seven days, inclusive of the cutoff
    Week,
    /// Since the same day last month
    Month,
}

impl DateRange {
    /// Whether `date` falls in this bucket relative to `today`.
    pub fn contains(self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => date == today,
            Self::Week => today.checked_sub_days(Days::new(7)).map_or(true, |cutoff| date >= cutoff),
            Self::Month => {
                today.checked_sub_months(Months::new(1)).map_or(true, |cutoff| date >= cutoff)
            }
        }
    }
}

/// Search text plus exact-match selectors; `None` means "all"
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadFilter {
    /// Case-insensitive substring of name, phone or address
    pub search: String,
    pub status: Option<LeadStatus>,
    pub assignee: Option<String>,
    pub date_range: DateRange,
}

impl LeadFilter {
    /// Case-insensitive text over name, phone and address.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Only leads in this status.
    pub fn status(mut self, status: LeadStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Only leads assigned to this salesperson.
    pub fn assignee(mut self, salesperson_id: impl Into<String>) -> Self {
        self.assignee = Some(salesperson_id.into());
        self
    }

    /// Only leads active within this bucket.
    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    /// Whether a lead passes every criterion set.
    pub fn matches(&self, lead: &Lead, today: NaiveDate) -> bool {
        self.matches_search(lead)
            && self.status.map_or(true, |status| lead.status == status)
            && self.assignee.as_deref().map_or(true, |id| lead.is_assigned_to(id))
            && self.date_range.contains(lead.last_activity, today)
    }

    /// Matching leads, in their original order
    pub fn apply(&self, leads: &[Lead], today: NaiveDate) -> Vec<Lead> {
        leads.iter().filter(|lead| self.matches(lead, today)).cloned().collect()
    }

    fn matches_search(&self, lead: &Lead) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        lead.customer_name.to_lowercase().contains(&needle)
            || lead.phone.to_lowercase().contains(&needle)
            || lead.property_address.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn lead(id: &str, name: &str, status: LeadStatus, assignee: Option<&str>, last: NaiveDate) -> Lead {
        Lead {
            id: id.to_string(),
            customer_name: name.to_string(),
            email: String::new(),
            phone: "+91 98450 12345".to_string(),
            property_address: "12 MG Road, Bengaluru".to_string(),
            avg_monthly_bill: 3000.0,
            status,
            assigned_to: assignee.map(str::to_string),
            system_size: 0.0,
            quote_value: 0.0,
            last_activity: last,
            created_at: last,
        }
    }

    #[test]
    fn date_buckets() {
        let today = date(2024, 3, 31);
        assert!(DateRange::Today.contains(today, today));
        assert!(!DateRange::Today.contains(date(2024, 3, 30), today));
        assert!(DateRange::Week.contains(date(2024, 3, 24), today));
        assert!(!DateRange::Week.contains(date(2024, 3, 23), today));
        // 31 March minus one month clamps to 29 February
        assert!(DateRange::Month.contains(date(2024, 2, 29), today));
        assert!(!DateRange::Month.contains(date(2024, 2, 28), today));
        assert!(DateRange::All.contains(date(2001, 1, 1), today));
    }

    #[test]
    fn search_is_case_insensitive_over_name_phone_address() {
        let today = date(2024, 5, 1);
        let leads = vec![lead("a", "Anita Sharma", LeadStatus::New, None, today)];

        assert_eq!(LeadFilter::default().search("anita").apply(&leads, today).len(), 1);
        assert_eq!(LeadFilter::default().search("98450").apply(&leads, today).len(), 1);
        assert_eq!(LeadFilter::default().search("BENGALURU").apply(&leads, today).len(), 1);
        assert!(LeadFilter::default().search("chennai").apply(&leads, today).is_empty());
    }

    #[test]
    fn predicates_are_conjunctive_and_order_preserving() {
        let today = date(2024, 5, 1);
        let leads = vec![
            lead("1", "Kiran", LeadStatus::Quoted, Some("sp-001"), today),
            lead("2", "Kavya", LeadStatus::New, Some("sp-001"), today),
            lead("3", "Karan", LeadStatus::Quoted, Some("sp-002"), today),
            lead("4", "Kumar", LeadStatus::Quoted, Some("sp-001"), date(2024, 1, 1)),
            lead("5", "Kabir", LeadStatus::Quoted, Some("sp-001"), today),
        ];

        let filter = LeadFilter::default()
            .search("k")
            .status(LeadStatus::Quoted)
            .assignee("sp-001")
            .date_range(DateRange::Week);
        let ids: Vec<_> = filter.apply(&leads, today).into_iter().map(|l| l.id).collect();

        assert_eq!(ids, vec!["1", "5"]);
    }
}
