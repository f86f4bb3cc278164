//! Unified error type for the domain layer.

use thiserror::Error;

/// Error type for domain operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Input failed validation (empty names, malformed polygons, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid ID format
    #[error("Invalid ID format: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Creates a validation error for malformed or missing input.
    ///
    /// # Example
    /// ```ignore
    /// if ring.len() < 3 {
    ///     return Err(DomainError::validation("ring needs at least 3 vertices"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
