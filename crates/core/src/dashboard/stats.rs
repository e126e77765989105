//! Aggregate figures shown on the salesperson and admin dashboards
//!
//! All figures are recomputed from the full record set on each call.

use serde::{Deserialize, Serialize};
use solarquote_domain::{Lead, LeadStatus, Salesperson};

/// Overview of one salesperson's own pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalespersonStats {
    pub total_leads: usize,
    pub new_leads: usize,
    pub quoted_leads: usize,
    pub won_leads: usize,
    pub total_value: f64,
}

impl SalespersonStats {
    /// Stats over the leads assigned to `salesperson_id`.
    pub fn for_salesperson(leads: &[Lead], salesperson_id: &str) -> Self {
        leads.iter().filter(|lead| lead.is_assigned_to(salesperson_id)).fold(
            Self::default(),
            |mut stats, lead| {
                stats.total_leads += 1;
                stats.total_value += lead.quote_value;
                match lead.status {
                    LeadStatus::New => stats.new_leads += 1,
                    LeadStatus::Quoted => stats.quoted_leads += 1,
                    LeadStatus::ClosedWon => stats.won_leads += 1,
                    _ => {}
                }
                stats
            },
        )
    }
}

/// Company-wide overview for administrators
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_leads: usize,
    pub total_value: f64,
    pub won_leads: usize,
    pub active_team: usize,
    /// Zero when there are no leads
    pub average_quote_value: f64,
}

impl AdminStats {
    /// Figures across every lead and the active team.
    pub fn compute(leads: &[Lead], team: &[Salesperson]) -> Self {
        let total_leads = leads.len();
        let total_value: f64 = leads.iter().map(|lead| lead.quote_value).sum();
        let average_quote_value =
            if total_leads == 0 { 0.0 } else { total_value / total_leads as f64 };

        Self {
            total_leads,
            total_value,
            won_leads: leads.iter().filter(|lead| lead.status == LeadStatus::ClosedWon).count(),
            active_team: team.iter().filter(|sp| sp.active).count(),
            average_quote_value,
        }
    }
}

/// Lead load carried by one active salesperson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalespersonWorkload {
    pub salesperson_id: String,
    pub name: String,
    pub total_leads: usize,
    /// Leads not yet closed won or lost
    pub active_leads: usize,
    pub won_leads: usize,
}

/// Workload for every active salesperson, in roster order.
pub fn team_workload(leads: &[Lead], team: &[Salesperson]) -> Vec<SalespersonWorkload> {
    team.iter()
        .filter(|sp| sp.active)
        .map(|sp| {
            let own: Vec<&Lead> = leads.iter().filter(|lead| lead.is_assigned_to(&sp.id)).collect();
            SalespersonWorkload {
                salesperson_id: sp.id.clone(),
                name: sp.name.clone(),
                total_leads: own.len(),
                active_leads: own.iter().filter(|lead| !lead.status.is_closed()).count(),
                won_leads: own.iter().filter(|lead| lead.status == LeadStatus::ClosedWon).count(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn lead(id: &str, assigned_to: Option<&str>, status: LeadStatus, value: f64) -> Lead {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");
        Lead {
            id: id.into(),
            customer_name: format!("Customer {id}"),
            email: String::new(),
            phone: "9000000000".into(),
            property_address: "Somewhere".into(),
            avg_monthly_bill: 2500.0,
            status,
            assigned_to: assigned_to.map(str::to_string),
            system_size: 0.0,
            quote_value: value,
            last_activity: date,
            created_at: date,
        }
    }

    fn salesperson(id: &str, active: bool) -> Salesperson {
        Salesperson {
            id: id.into(),
            name: format!("Rep {id}"),
            email: format!("{id}@solarquote.com"),
            phone: String::new(),
            active,
            sales_target: 500_000.0,
            total_sales: 0.0,
            leads_assigned: 0,
        }
    }

    fn leads() -> Vec<Lead> {
        vec![
            lead("a", Some("sp-001"), LeadStatus::New, 0.0),
            lead("b", Some("sp-001"), LeadStatus::Quoted, 120_000.0),
            lead("c", Some("sp-001"), LeadStatus::ClosedWon, 200_000.0),
            lead("d", Some("sp-002"), LeadStatus::ClosedLost, 80_000.0),
            lead("e", None, LeadStatus::New, 0.0),
        ]
    }

    #[test]
    fn salesperson_stats_only_count_own_leads() {
        let stats = SalespersonStats::for_salesperson(&leads(), "sp-001");
        assert_eq!(stats.total_leads, 3);
        assert_eq!(stats.new_leads, 1);
        assert_eq!(stats.quoted_leads, 1);
        assert_eq!(stats.won_leads, 1);
        assert_eq!(stats.total_value, 320_000.0);
    }

    #[test]
    fn admin_stats_average_over_all_leads() {
        let team = [salesperson("sp-001", true), salesperson("sp-002", false)];
        let stats = AdminStats::compute(&leads(), &team);

        assert_eq!(stats.total_leads, 5);
        assert_eq!(stats.total_value, 400_000.0);
        assert_eq!(stats.won_leads, 1);
        assert_eq!(stats.active_team, 1);
        assert_eq!(stats.average_quote_value, 80_000.0);
    }

    #[test]
    fn admin_stats_with_no_leads_has_zero_average() {
        assert_eq!(AdminStats::compute(&[], &[]).average_quote_value, 0.0);
    }

    #[test]
    fn workload_skips_inactive_and_splits_active_from_closed() {
        let team = [salesperson("sp-001", true), salesperson("sp-002", false)];
        let workload = team_workload(&leads(), &team);

        assert_eq!(workload.len(), 1);
        assert_eq!(workload[0].total_leads, 3);
        assert_eq!(workload[0].active_leads, 2);
        assert_eq!(workload[0].won_leads, 1);
    }
}
