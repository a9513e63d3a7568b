//! Helpers for advisory input validation.
//!
//! The gateways and the state store never call these; forms and the seeder do.

use crate::errors::ValidationError;

pub type ValidationResult = std::result::Result<(), ValidationError>;

pub fn ensure_not_blank(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.to_string()));
    }
    Ok(())
}

pub fn ensure_non_negative(field: &str, value: f64) -> ValidationResult {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}
