use std::time::Duration;

use solarquote_domain::{LoggingConfig, SolarQuoteError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the configured level. Calling this twice is
/// harmless; the second install is ignored.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        info!(level = %config.level, json = config.json, "tracing initialised");
    }
}

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a logical identifier such as `"quotation::save_quotation"`
/// and must not carry customer data.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    success: bool,
    error_type: Option<&str>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, error_type, "command_execution_failure");
    }
}

/// Convert a `SolarQuoteError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SolarQuoteError) -> &'static str {
    match error {
        SolarQuoteError::Config(_) => "config",
        SolarQuoteError::Auth(_) => "auth",
        SolarQuoteError::NotFound(_) => "not_found",
        SolarQuoteError::InvalidInput(_) => "invalid_input",
        SolarQuoteError::Validation(_) => "validation",
        SolarQuoteError::Internal(_) => "internal",
    }
}
