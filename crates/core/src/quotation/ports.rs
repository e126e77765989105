//! Outbound hooks for finished quotations
//!
//! Proposal delivery and document export are wired to log-only adapters
//! today; real email/WhatsApp and PDF services implement the same traits.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solarquote_domain::{Lead, QuotationResult, Result};

/// Delivery channel for a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalChannel {
    Email,
    WhatsApp,
}

impl fmt::Display for ProposalChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("email"),
            Self::WhatsApp => f.write_str("whatsapp"),
        }
    }
}

/// Sends a quotation proposal to the lead's customer
#[async_trait]
pub trait ProposalSender: Send + Sync {
    /// Deliver the proposal over one channel
    async fn send_proposal(&self, channel: ProposalChannel, lead: &Lead) -> Result<()>;
}

/// Renders a quotation into a shareable document
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    /// Produce a document for the quotation
    async fn export_document(&self, lead: &Lead, quotation: &QuotationResult) -> Result<()>;
}
