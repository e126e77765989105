//! Core services running against the seeded session store

use std::sync::Arc;

use chrono::NaiveDate;
use solarquote_core::{FixedClock, LeadService, TeamService};
use solarquote_domain::{LeadStatus, QuotationConfig};
use solarquote_infra::seed::demo_snapshot;
use solarquote_infra::SessionStore;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

fn lead_service(store: &Arc<SessionStore>) -> LeadService {
    LeadService::new(store.clone(), store.clone(), store.clone(), Arc::new(FixedClock(today())))
}

#[test]
fn saved_quotation_is_visible_through_every_port() {
    let store = Arc::new(SessionStore::new(demo_snapshot(today())));
    let service = lead_service(&store);
    let config = QuotationConfig::for_catalog(&store.snapshot().hardware);

    let saved =
        service.save_quotation("lead-002", &config, LeadStatus::Quoted).expect("quotation saved");

    // 10 × 540 W at 14500, Growatt inverter, 5.4 kW install, 3 labour days
    assert_eq!(saved.lead.system_size, 5.4);
    assert_eq!(saved.lead.quote_value, 145_000.0 + 42_000.0 + 27_000.0 + 4_500.0);

    let stored = store.snapshot().leads.into_iter().find(|l| l.id == "lead-002");
    assert_eq!(stored, Some(saved.lead));
}

#[test]
fn deactivated_salesperson_cannot_receive_leads() {
    let store = Arc::new(SessionStore::new(demo_snapshot(today())));
    let service = lead_service(&store);
    let team = TeamService::new(store.clone());

    team.toggle_active("sp-002").expect("deactivated");
    assert!(service.assign_lead("lead-007", "sp-002").is_err());

    let lead = service.assign_lead("lead-007", "sp-003").expect("assigned");
    assert_eq!(lead.assigned_to.as_deref(), Some("sp-003"));
}
