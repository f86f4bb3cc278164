//! Common validation helpers for use cases.

/// Validation error type.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("{field_name} is required")]
    Missing { field_name: &'static str },

    #[error("{field_name} cannot be empty")]
    Empty { field_name: &'static str },
}

/// Unwrap a required request field.
pub fn require_present<T>(value: Option<T>, field_name: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing { field_name })
}

/// Validate a string is non-empty after trimming.
pub fn require_non_empty(value: &str, field_name: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field_name });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_named() {
        let err = require_present::<f64>(None, "latitude").unwrap_err();
        assert_eq!(err.to_string(), "latitude is required");
        assert_eq!(require_present(Some(1.5), "latitude").unwrap(), 1.5);
    }

    #[test]
    fn whitespace_counts_as_empty() {
        assert!(require_non_empty(" \t", "name").is_err());
        assert!(require_non_empty(" a ", "name").is_ok());
    }
}
