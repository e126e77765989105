//! Shared helpers for command integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use solarquote_core::FixedClock;
use solarquote_domain::{Config, Role, Session};
use solarquote_infra::StaticAuthenticator;
use solarquote_lib::context::AppContext;

/// Date every seeded test session treats as today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

/// Demo-seeded config with no simulated save latency.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.session.save_delay_ms = 0;
    config
}

/// Context over the demo data, pinned to [`today`].
pub fn test_context() -> AppContext {
    test_context_with(test_config())
}

pub fn test_context_with(config: Config) -> AppContext {
    AppContext::with_clock(config, Arc::new(FixedClock(today())))
}

pub fn admin_session() -> Session {
    StaticAuthenticator::account_for(Role::Admin).session()
}

/// Rajesh Kumar, backed by `sp-001`
pub fn sales_session() -> Session {
    StaticAuthenticator::account_for(Role::Salesperson).session()
}
