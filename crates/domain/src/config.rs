//! Configuration management

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

/// Session behaviour (simulated latencies and notice lifetimes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Artificial delay before a quotation save is confirmed.
    pub save_delay_ms: u64,
    /// How long the "saved" notice stays visible.
    pub notice_clear_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

/// Demo data seeding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub demo_data: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { save_delay_ms: 500, notice_clear_ms: 3000 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo_data: true }
    }
}
