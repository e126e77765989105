//! Quote builder commands: preview, save, proposal and export hooks

mod support;

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use solarquote_core::{ProposalChannel, ProposalSender};
use solarquote_domain::{Lead, LeadStatus, Result as DomainResult, SolarQuoteError};
use solarquote_lib::{
    default_quotation_config, export_document, get_lead, preview_quotation, save_quotation,
    send_proposal,
};
use support::{admin_session, sales_session, test_config, test_context, test_context_with, today};

#[derive(Default)]
struct RecordingSender {
    sent: Mutex<Vec<(ProposalChannel, String)>>,
}

#[async_trait]
impl ProposalSender for RecordingSender {
    async fn send_proposal(&self, channel: ProposalChannel, lead: &Lead) -> DomainResult<()> {
        self.sent.lock().expect("lock poisoned").push((channel, lead.id.clone()));
        Ok(())
    }
}

#[tokio::test]
async fn default_config_uses_first_catalog_items() {
    let ctx = test_context();

    let config = default_quotation_config(&ctx).await.expect("config");

    assert_eq!(config.panel_count(), 10);
    assert_eq!(config.panel_type(), "panel-1");
    assert_eq!(config.battery_type(), "battery-1");
    assert_eq!(config.inverter_type(), "inverter-1");
    assert!(!config.battery_backup());
}

#[tokio::test]
async fn preview_includes_battery_only_when_enabled() {
    let ctx = test_context();
    let mut config = default_quotation_config(&ctx).await.expect("config");

    let without = preview_quotation(&ctx, &config).await.expect("preview");
    config.set_battery_backup(true);
    let with = preview_quotation(&ctx, &config).await.expect("preview");

    assert_eq!(with.total_project_cost - without.total_project_cost, 65_000.0);
    assert_eq!(with.monthly_savings, without.monthly_savings);
}

#[tokio::test]
async fn save_updates_lead_and_returns_notice() {
    let ctx = test_context();
    let session = sales_session();
    let config = default_quotation_config(&ctx).await.expect("config");

    let outcome = save_quotation(&ctx, &session, "lead-002", &config, LeadStatus::Quoted)
        .await
        .expect("saved");

    assert_eq!(outcome.lead.status, LeadStatus::Quoted);
    assert_eq!(outcome.lead.quote_value, outcome.quotation.total_project_cost);
    assert_eq!(outcome.lead.last_activity, today());
    assert_eq!(outcome.notice.message, "Quotation saved successfully!");
    assert!(outcome.notice.is_visible_at(chrono::Utc::now()));

    let stored = get_lead(&ctx, &session, "lead-002").await.expect("lead");
    assert_eq!(stored, outcome.lead);
}

#[tokio::test]
async fn save_waits_for_configured_delay() {
    let mut config = test_config();
    config.session.save_delay_ms = 40;
    let ctx = test_context_with(config);
    let quote = default_quotation_config(&ctx).await.expect("config");

    let started = Instant::now();
    save_quotation(&ctx, &sales_session(), "lead-001", &quote, LeadStatus::Negotiating)
        .await
        .expect("saved");

    assert!(started.elapsed() >= Duration::from_millis(40));
}

#[tokio::test]
async fn salesperson_cannot_touch_other_peoples_leads() {
    let ctx = test_context();
    let quote = default_quotation_config(&ctx).await.expect("config");

    let err = save_quotation(&ctx, &sales_session(), "lead-005", &quote, LeadStatus::Quoted)
        .await
        .expect_err("not visible");
    assert!(matches!(err, SolarQuoteError::NotFound(_)));

    // Admins see every lead.
    save_quotation(&ctx, &admin_session(), "lead-005", &quote, LeadStatus::Quoted)
        .await
        .expect("admin save");
}

#[tokio::test]
async fn proposal_goes_through_injected_sender() {
    let sender = Arc::new(RecordingSender::default());
    let ctx = test_context().with_proposal_sender(sender.clone());

    send_proposal(&ctx, &sales_session(), "lead-001", ProposalChannel::WhatsApp)
        .await
        .expect("sent");

    let sent = sender.sent.lock().expect("lock poisoned").clone();
    assert_eq!(sent, vec![(ProposalChannel::WhatsApp, "lead-001".to_string())]);
}

#[tokio::test]
async fn export_returns_the_exported_quotation() {
    let ctx = test_context();
    let quote = default_quotation_config(&ctx).await.expect("config");

    let exported = export_document(&ctx, &sales_session(), "lead-003", &quote).await.expect("export");
    let preview = preview_quotation(&ctx, &quote).await.expect("preview");
    assert_eq!(exported, preview);
}
