//! Application context - dependency injection container

use std::sync::Arc;

use solarquote_core::{
    Authenticator, CatalogService, Clock, DocumentExporter, LeadService, ProposalSender,
    TeamService,
};
use solarquote_domain::{Config, Result};
use solarquote_infra::seed::demo_snapshot;
use solarquote_infra::{
    LoggingDocumentExporter, LoggingProposalSender, SessionStore, StaticAuthenticator,
    SystemClock,
};
use tracing::info;

/// Application context - holds all services and dependencies for a session
pub struct AppContext {
    pub config: Config,
    pub store: Arc<SessionStore>,
    pub clock: Arc<dyn Clock>,
    pub authenticator: Arc<dyn Authenticator>,

    // Core services
    pub leads: LeadService,
    pub team: TeamService,
    pub catalog: CatalogService,

    // Outbound hooks
    pub proposals: Arc<dyn ProposalSender>,
    pub exporter: Arc<dyn DocumentExporter>,
}

impl AppContext {
    /// Load configuration and build a context on the system clock.
    pub fn new() -> Result<Self> {
        let config = solarquote_infra::config::load()?;
        Ok(Self::new_with_config(config))
    }

    /// Build a context from an explicit configuration.
    pub fn new_with_config(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build a context on a caller-supplied clock. Demo data, when enabled,
    /// is dated relative to that clock.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        let store = if config.seed.demo_data {
            SessionStore::new(demo_snapshot(clock.today()))
        } else {
            SessionStore::empty()
        };
        Self::with_store(config, Arc::new(store), clock)
    }

    /// Wire services over an existing store.
    pub fn with_store(config: Config, store: Arc<SessionStore>, clock: Arc<dyn Clock>) -> Self {
        let leads = LeadService::new(store.clone(), store.clone(), store.clone(), clock.clone());
        let team = TeamService::new(store.clone());
        let catalog = CatalogService::new(store.clone());

        info!(
            seeded = config.seed.demo_data,
            save_delay_ms = config.session.save_delay_ms,
            "Application context ready"
        );

        Self {
            config,
            store,
            clock,
            authenticator: Arc::new(StaticAuthenticator::new()),
            leads,
            team,
            catalog,
            proposals: Arc::new(LoggingProposalSender),
            exporter: Arc::new(LoggingDocumentExporter),
        }
    }

    /// Swap the credential check, e.g. for a real identity provider.
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Replace the proposal delivery hook.
    pub fn with_proposal_sender(mut self, proposals: Arc<dyn ProposalSender>) -> Self {
        self.proposals = proposals;
        self
    }

    /// Replace the document export hook.
    pub fn with_document_exporter(mut self, exporter: Arc<dyn DocumentExporter>) -> Self {
        self.exporter = exporter;
        self
    }
}
