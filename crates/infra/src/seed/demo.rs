//! Demo catalog, team and leads
//!
//! Lead dates are relative to the seeding date so the today/week/month
//! buckets always have members.

use chrono::{Days, NaiveDate};
use solarquote_domain::{
    Dimensions, HardwareItem, HardwareKind, Lead, LeadStatus, PricingRules, Salesperson,
};

use crate::store::SessionSnapshot;

fn hardware(
    id: &str,
    kind: HardwareKind,
    brand: &str,
    model: &str,
    capacity: f64,
    price: f64,
    dimensions: (f64, f64, f64),
) -> HardwareItem {
    let (width, height, depth) = dimensions;
    HardwareItem {
        id: id.to_string(),
        kind,
        brand: brand.to_string(),
        model: model.to_string(),
        capacity,
        price,
        dimensions: Dimensions { width, height, depth },
    }
}

/// Panels in W, batteries in kWh, inverters in kW; dimensions in mm.
pub fn demo_catalog() -> Vec<HardwareItem> {
    use HardwareKind::{Battery, Inverter, Panel};

    vec![
        hardware("panel-1", Panel, "Waaree", "Bi-55 540W", 540.0, 14_500.0, (2279.0, 1134.0, 35.0)),
        hardware("panel-2", Panel, "Adani", "Eternal 545W", 545.0, 15_200.0, (2278.0, 1134.0, 35.0)),
        hardware("panel-3", Panel, "Tata Power", "TP400 Mono", 400.0, 11_000.0, (1722.0, 1134.0, 30.0)),
        hardware("battery-1", Battery, "Luminous", "LPTT 5kWh", 5.0, 65_000.0, (520.0, 680.0, 220.0)),
        hardware("battery-2", Battery, "Exide", "Solatube 10kWh", 10.0, 120_000.0, (600.0, 900.0, 250.0)),
        hardware("inverter-1", Inverter, "Growatt", "MIN 5000TL-X", 5.0, 42_000.0, (375.0, 350.0, 160.0)),
        hardware("inverter-2", Inverter, "SMA", "Sunny Tripower 10", 10.0, 98_000.0, (460.0, 497.0, 176.0)),
    ]
}

/// Demo pricing rates
pub fn demo_pricing() -> PricingRules {
    PricingRules {
        base_installation_rate: 5_000.0,
        labour_cost_per_day: 1_500.0,
        scaffolding_cost_per_meter: 800.0,
        bird_net_cost_per_panel: 350.0,
    }
}

fn member(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    active: bool,
    total_sales: f64,
    leads_assigned: u32,
) -> Salesperson {
    Salesperson {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        active,
        sales_target: 500_000.0,
        total_sales,
        leads_assigned,
    }
}

/// `sp-001` backs the static salesperson login.
pub fn demo_team() -> Vec<Salesperson> {
    vec![
        member("sp-001", "Rajesh Kumar", "sales@solarquote.com", "+91 98765 43210", true, 325_000.0, 4),
        member("sp-002", "Priya Sharma", "priya@solarquote.com", "+91 98765 43211", true, 410_000.0, 2),
        member("sp-003", "Amit Patel", "amit@solarquote.com", "+91 98765 43212", true, 180_000.0, 1),
        member("sp-004", "Sneha Reddy", "sneha@solarquote.com", "+91 98765 43213", false, 95_000.0, 0),
    ]
}

fn days_ago(today: NaiveDate, days: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(days)).unwrap_or(today)
}

struct LeadSeed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
    bill: f64,
    status: LeadStatus,
    assigned_to: Option<&'static str>,
    system_size: f64,
    quote_value: f64,
    created_days_ago: u64,
    activity_days_ago: u64,
}

impl LeadSeed {
    fn build(&self, today: NaiveDate) -> Lead {
        Lead {
            id: self.id.to_string(),
            customer_name: self.name.to_string(),
            email: self.email.to_string(),
            phone: self.phone.to_string(),
            property_address: self.address.to_string(),
            avg_monthly_bill: self.bill,
            status: self.status,
            assigned_to: self.assigned_to.map(str::to_string),
            system_size: self.system_size,
            quote_value: self.quote_value,
            last_activity: days_ago(today, self.activity_days_ago),
            created_at: days_ago(today, self.created_days_ago),
        }
    }
}

const LEADS: [LeadSeed; 8] = [
    LeadSeed {
        id: "lead-001",
        name: "Anil Deshmukh",
        email: "anil.deshmukh@gmail.com",
        phone: "+91 99001 22334",
        address: "14 Koregaon Park, Pune",
        bill: 4_500.0,
        status: LeadStatus::Quoted,
        assigned_to: Some("sp-001"),
        system_size: 5.4,
        quote_value: 247_100.0,
        created_days_ago: 12,
        activity_days_ago: 2,
    },
    LeadSeed {
        id: "lead-002",
        name: "Meenakshi Iyer",
        email: "meenakshi.iyer@yahoo.com",
        phone: "+91 98450 11223",
        address: "7 Besant Nagar, Chennai",
        bill: 3_200.0,
        status: LeadStatus::New,
        assigned_to: Some("sp-001"),
        system_size: 0.0,
        quote_value: 0.0,
        created_days_ago: 0,
        activity_days_ago: 0,
    },
    LeadSeed {
        id: "lead-003",
        name: "Harpreet Singh",
        email: "harpreet.s@outlook.com",
        phone: "+91 98140 55667",
        address: "221 Sector 17, Chandigarh",
        bill: 6_800.0,
        status: LeadStatus::Negotiating,
        assigned_to: Some("sp-001"),
        system_size: 8.1,
        quote_value: 362_500.0,
        created_days_ago: 25,
        activity_days_ago: 5,
    },
    LeadSeed {
        id: "lead-004",
        name: "Farah Khan",
        email: "",
        phone: "+91 99200 33445",
        address: "3 Bandra West, Mumbai",
        bill: 5_100.0,
        status: LeadStatus::ClosedWon,
        assigned_to: Some("sp-001"),
        system_size: 6.5,
        quote_value: 298_000.0,
        created_days_ago: 48,
        activity_days_ago: 20,
    },
    LeadSeed {
        id: "lead-005",
        name: "Suresh Nair",
        email: "suresh.nair@gmail.com",
        phone: "+91 94470 66778",
        address: "55 Panampilly Nagar, Kochi",
        bill: 2_900.0,
        status: LeadStatus::Contacted,
        assigned_to: Some("sp-002"),
        system_size: 0.0,
        quote_value: 0.0,
        created_days_ago: 3,
        activity_days_ago: 1,
    },
    LeadSeed {
        id: "lead-006",
        name: "Lakshmi Venkatesh",
        email: "lakshmi.v@gmail.com",
        phone: "+91 98860 77889",
        address: "90 Indiranagar, Bengaluru",
        bill: 7_400.0,
        status: LeadStatus::ClosedLost,
        assigned_to: Some("sp-003"),
        system_size: 10.8,
        quote_value: 455_000.0,
        created_days_ago: 40,
        activity_days_ago: 30,
    },
    LeadSeed {
        id: "lead-007",
        name: "Rohit Agarwal",
        email: "rohit.agarwal@gmail.com",
        phone: "+91 98290 88990",
        address: "12 C-Scheme, Jaipur",
        bill: 3_800.0,
        status: LeadStatus::New,
        assigned_to: None,
        system_size: 0.0,
        quote_value: 0.0,
        created_days_ago: 1,
        activity_days_ago: 1,
    },
    LeadSeed {
        id: "lead-008",
        name: "Kavita Joshi",
        email: "",
        phone: "+91 97300 99001",
        address: "8 Model Colony, Pune",
        bill: 2_400.0,
        status: LeadStatus::New,
        assigned_to: None,
        system_size: 0.0,
        quote_value: 0.0,
        created_days_ago: 6,
        activity_days_ago: 6,
    },
];

/// Demo pipeline, dated relative to `today`
pub fn demo_leads(today: NaiveDate) -> Vec<Lead> {
    LEADS.iter().map(|seed| seed.build(today)).collect()
}

/// Full demo session as of `today`.
pub fn demo_snapshot(today: NaiveDate) -> SessionSnapshot {
    SessionSnapshot {
        leads: demo_leads(today),
        salespeople: demo_team(),
        hardware: demo_catalog(),
        pricing: demo_pricing(),
    }
}
