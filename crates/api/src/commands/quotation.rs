//! Quote builder commands

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use solarquote_core::ProposalChannel;
use solarquote_domain::constants::SAVE_SUCCESS_MESSAGE;
use solarquote_domain::{
    Lead, LeadStatus, QuotationConfig, QuotationResult, Result as DomainResult, Session,
};
use tracing::debug;

use super::leads::visible_lead;
use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Confirmation shown after a save, until `expires_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveNotice {
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

impl SaveNotice {
    fn saved(now: DateTime<Utc>, visible_for: Duration) -> Self {
        let visible_for =
            chrono::Duration::from_std(visible_for).unwrap_or_else(|_| chrono::Duration::zero());
        Self { message: SAVE_SUCCESS_MESSAGE.to_string(), expires_at: now + visible_for }
    }

    /// Whether the notice is still on screen at `at`.
    pub fn is_visible_at(&self, at: DateTime<Utc>) -> bool {
        at < self.expires_at
    }
}

/// Result of a confirmed quotation save
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub lead: Lead,
    pub quotation: QuotationResult,
    pub notice: SaveNotice,
}

/// Initial quote-builder state for the current catalog.
pub async fn default_quotation_config(ctx: &AppContext) -> DomainResult<QuotationConfig> {
    execute_command("quotation::default_quotation_config", || async {
        Ok(QuotationConfig::for_catalog(&ctx.catalog.list()?))
    })
    .await
}

/// Live recomputation while the configuration is edited.
pub async fn preview_quotation(
    ctx: &AppContext,
    config: &QuotationConfig,
) -> DomainResult<QuotationResult> {
    execute_command("quotation::preview_quotation", || async {
        ctx.leads.preview_quotation(config)
    })
    .await
}

/// Save the quotation onto the lead with the chosen status.
///
/// Completes after the configured save delay; the record is written before
/// the delay starts, so the returned lead is already visible to readers.
pub async fn save_quotation(
    ctx: &AppContext,
    session: &Session,
    lead_id: &str,
    config: &QuotationConfig,
    status: LeadStatus,
) -> DomainResult<SaveOutcome> {
    execute_command("quotation::save_quotation", || async {
        visible_lead(ctx, session, lead_id)?;
        let saved = ctx.leads.save_quotation(lead_id, config, status)?;

        let delay = Duration::from_millis(ctx.config.session.save_delay_ms);
        if !delay.is_zero() {
            debug!(delay_ms = ctx.config.session.save_delay_ms, "Simulating save latency");
            tokio::time::sleep(delay).await;
        }

        let notice = SaveNotice::saved(
            Utc::now(),
            Duration::from_millis(ctx.config.session.notice_clear_ms),
        );
        Ok(SaveOutcome { lead: saved.lead, quotation: saved.quotation, notice })
    })
    .await
}

/// Hand the lead's proposal to the delivery hook.
pub async fn send_proposal(
    ctx: &AppContext,
    session: &Session,
    lead_id: &str,
    channel: ProposalChannel,
) -> DomainResult<()> {
    execute_command("quotation::send_proposal", || async {
        let lead = visible_lead(ctx, session, lead_id)?;
        ctx.proposals.send_proposal(channel, &lead).await
    })
    .await
}

/// Hand the lead and its current quotation to the export hook.
pub async fn export_document(
    ctx: &AppContext,
    session: &Session,
    lead_id: &str,
    config: &QuotationConfig,
) -> DomainResult<QuotationResult> {
    execute_command("quotation::export_document", || async {
        let lead = visible_lead(ctx, session, lead_id)?;
        let quotation = ctx.leads.preview_quotation(config)?;
        ctx.exporter.export_document(&lead, &quotation).await?;
        Ok(quotation)
    })
    .await
}
