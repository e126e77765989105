//! Log-only adapters for proposal delivery and document export
//!
//! Both hooks only record the request. No message leaves the process and no
//! file is written.

use async_trait::async_trait;
use solarquote_core::{DocumentExporter, ProposalChannel, ProposalSender};
use solarquote_domain::{Lead, QuotationResult, Result};
use tracing::info;

/// Records proposal requests instead of sending them
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingProposalSender;

#[async_trait]
impl ProposalSender for LoggingProposalSender {
    async fn send_proposal(&self, channel: ProposalChannel, lead: &Lead) -> Result<()> {
        info!(
            channel = %channel,
            lead_id = %lead.id,
            customer = %lead.customer_name,
            "Proposal would be sent"
        );
        Ok(())
    }
}

/// Records export requests instead of rendering a document
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingDocumentExporter;

#[async_trait]
impl DocumentExporter for LoggingDocumentExporter {
    async fn export_document(&self, lead: &Lead, quotation: &QuotationResult) -> Result<()> {
        info!(
            lead_id = %lead.id,
            system_size_kw = quotation.system_size_kw,
            total = quotation.total_project_cost,
            "Quotation document would be exported"
        );
        Ok(())
    }
}
