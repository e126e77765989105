//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

/// A single field-scoped validation message, shown beside the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct FieldMessage {
    pub field: String,
    pub message: String,
}

impl FieldMessage {
    /// Message for one form field
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// Main error type for SolarQuote
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SolarQuoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldMessage>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SolarQuoteError {
    /// Field messages carried by a validation failure (empty otherwise).
    pub fn field_messages(&self) -> &[FieldMessage] {
        match self {
            Self::Validation(messages) => messages,
            _ => &[],
        }
    }
}

/// Result type alias for SolarQuote operations
pub type Result<T> = std::result::Result<T, SolarQuoteError>;
