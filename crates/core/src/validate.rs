//! Small field validation helpers shared across resources.

use crate::error::CoreError;

/// Validate that a required text field is non-empty after trimming.
pub fn non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that a manually tracked lesson counter is not negative.
pub fn non_negative_counter(field: &'static str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}
