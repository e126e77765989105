//! Fixture builders for leads, team and catalog

use chrono::NaiveDate;
use solarquote_domain::{
    Dimensions, HardwareItem, HardwareKind, Lead, LeadStatus, PricingRules, Salesperson,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn item(id: &str, kind: HardwareKind, capacity: f64, price: f64) -> HardwareItem {
    HardwareItem {
        id: id.to_string(),
        kind,
        brand: "Fixture".to_string(),
        model: id.to_string(),
        capacity,
        price,
        dimensions: Dimensions::default(),
    }
}

/// 400 W panels at 10000, a 5 kWh battery and a 5 kW inverter.
pub fn catalog() -> Vec<HardwareItem> {
    vec![
        item("panel-400", HardwareKind::Panel, 400.0, 10_000.0),
        item("panel-540", HardwareKind::Panel, 540.0, 14_000.0),
        item("battery-5", HardwareKind::Battery, 5.0, 60_000.0),
        item("inverter-5", HardwareKind::Inverter, 5.0, 20_000.0),
    ]
}

pub fn rules() -> PricingRules {
    PricingRules {
        base_installation_rate: 1_500.0,
        labour_cost_per_day: 1_000.0,
        scaffolding_cost_per_meter: 500.0,
        bird_net_cost_per_panel: 200.0,
    }
}

pub fn salesperson(id: &str, name: &str, active: bool) -> Salesperson {
    Salesperson {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{id}@solarquote.com"),
        phone: "+91 98765 43210".to_string(),
        active,
        sales_target: 500_000.0,
        total_sales: 0.0,
        leads_assigned: 0,
    }
}

pub fn team() -> Vec<Salesperson> {
    vec![
        salesperson("sp-001", "Rajesh Kumar", true),
        salesperson("sp-002", "Priya Sharma", true),
        salesperson("sp-003", "Vikram Singh", false),
    ]
}

pub fn lead(id: &str, name: &str, assigned_to: Option<&str>, created: NaiveDate) -> Lead {
    Lead {
        id: id.to_string(),
        customer_name: name.to_string(),
        email: String::new(),
        phone: "9845012345".to_string(),
        property_address: "Whitefield, Bengaluru".to_string(),
        avg_monthly_bill: 3_000.0,
        status: LeadStatus::New,
        assigned_to: assigned_to.map(str::to_string),
        system_size: 0.0,
        quote_value: 0.0,
        last_activity: created,
        created_at: created,
    }
}

pub fn leads() -> Vec<Lead> {
    vec![
        lead("lead-1", "Anil Kapoor", Some("sp-001"), date(2024, 6, 15)),
        lead("lead-2", "Deepa Nair", Some("sp-001"), date(2024, 6, 1)),
        lead("lead-3", "Farhan Ali", Some("sp-002"), date(2024, 4, 20)),
        lead("lead-4", "Gita Bose", None, date(2024, 6, 10)),
    ]
}
