//! Bridge from form validation to the domain error type

use solarquote_common::validation::ValidationError;
use solarquote_domain::{FieldMessage, SolarQuoteError};

/// Carry every field message across the service boundary.
pub fn into_domain_error(err: ValidationError) -> SolarQuoteError {
    SolarQuoteError::Validation(
        err.errors.into_iter().map(|e| FieldMessage::new(e.field, e.message)).collect(),
    )
}
