//! Shared test helpers for `solarquote-core` integration tests.
//!
//! Lightweight in-memory mocks for the store ports plus fixture builders,
//! so service tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod fixtures;
pub mod repositories;

use std::sync::Arc;

use chrono::NaiveDate;
use solarquote_core::{FixedClock, LeadService};

use self::repositories::{MockCatalogRepository, MockLeadRepository, MockSalespersonRepository};

/// The date every service test treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

/// Mocks seeded with the standard fixtures, kept so tests can inspect them.
pub struct Harness {
    pub leads: Arc<MockLeadRepository>,
    pub catalog: Arc<MockCatalogRepository>,
    pub team: Arc<MockSalespersonRepository>,
    pub service: LeadService,
}

impl Harness {
    pub fn new() -> Self {
        let leads = Arc::new(MockLeadRepository::new(fixtures::leads()));
        let catalog = Arc::new(MockCatalogRepository::new(fixtures::catalog(), fixtures::rules()));
        let team = Arc::new(MockSalespersonRepository::new(fixtures::team()));
        let service = LeadService::new(
            leads.clone(),
            catalog.clone(),
            team.clone(),
            Arc::new(FixedClock(today())),
        );
        Self { leads, catalog, team, service }
    }
}
