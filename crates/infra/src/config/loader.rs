//! Configuration loader
//!
//! ## Loading Strategy
//! 1. Environment variables, when `SOLARQUOTE_SAVE_DELAY_MS` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults
//!
//! ## Environment Variables
//! - `SOLARQUOTE_SAVE_DELAY_MS`: simulated save latency (required for this path)
//! - `SOLARQUOTE_NOTICE_CLEAR_MS`: how long the save notice stays visible
//! - `SOLARQUOTE_LOG_LEVEL`: default tracing level
//! - `SOLARQUOTE_LOG_JSON`: JSON log output (true/false)
//! - `SOLARQUOTE_SEED_DEMO_DATA`: seed the session with demo records
//!
//! ## File Locations
//! `solarquote.{toml,json}` then `config.{toml,json}`, in the working
//! directory and up to two parents, then next to the executable.

use std::path::{Path, PathBuf};

use solarquote_domain::{Config, LoggingConfig, Result, SeedConfig, SessionConfig, SolarQuoteError};

const FILE_NAMES: [&str; 4] = ["solarquote.toml", "solarquote.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `SolarQuoteError::Config` when an environment value or a found
/// config file is malformed. Missing sources are not errors.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            return Ok(config);
        }
        Err(e) if std::env::var(SAVE_DELAY_VAR).is_ok() => return Err(e),
        Err(e) => tracing::debug!(error = %e, "Environment config incomplete, trying file"),
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

const SAVE_DELAY_VAR: &str = "SOLARQUOTE_SAVE_DELAY_MS";

/// Load configuration from environment variables
///
/// `SOLARQUOTE_SAVE_DELAY_MS` must be set; every other variable falls back
/// to its default.
///
/// # Errors
/// Returns `SolarQuoteError::Config` if the required variable is missing or
/// any value fails to parse.
pub fn load_from_env() -> Result<Config> {
    let defaults = Config::default();

    let save_delay_ms = parse_u64(SAVE_DELAY_VAR, &env_var(SAVE_DELAY_VAR)?)?;
    let notice_clear_ms = match std::env::var("SOLARQUOTE_NOTICE_CLEAR_MS") {
        Ok(raw) => parse_u64("SOLARQUOTE_NOTICE_CLEAR_MS", &raw)?,
        Err(_) => defaults.session.notice_clear_ms,
    };
    let level = std::env::var("SOLARQUOTE_LOG_LEVEL").unwrap_or(defaults.logging.level);

    Ok(Config {
        session: SessionConfig { save_delay_ms, notice_clear_ms },
        logging: LoggingConfig {
            level,
            json: env_bool("SOLARQUOTE_LOG_JSON", defaults.logging.json),
        },
        seed: SeedConfig {
            demo_data: env_bool("SOLARQUOTE_SEED_DEMO_DATA", defaults.seed.demo_data),
        },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations.
///
/// # Errors
/// Returns `SolarQuoteError::Config` if no file is found, the file cannot
/// be read, or its contents do not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(SolarQuoteError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SolarQuoteError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SolarQuoteError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| SolarQuoteError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| SolarQuoteError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(SolarQuoteError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// First existing config file in the standard locations, if any.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        SolarQuoteError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn parse_u64(key: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| SolarQuoteError::Config(format!("Invalid value for {}: {}", key, e)))
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
