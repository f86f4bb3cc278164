//! Validated text newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for region names
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for free-text descriptions and messages
pub const MAX_TEXT_LENGTH: usize = 5000;

/// A validated region name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionName(String);

impl RegionName {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the trimmed name is empty or
    /// longer than 200 characters.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Region name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Region name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for RegionName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RegionName> for String {
    fn from(name: RegionName) -> String {
        name.0
    }
}

/// Rejects free text longer than [`MAX_TEXT_LENGTH`] characters.
pub fn check_text_length(value: &str, field_name: &str) -> Result<(), DomainError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::validation(format!(
            "{} cannot exceed {} characters",
            field_name, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_name_is_trimmed() {
        let name = RegionName::new("  Zone A ").unwrap();
        assert_eq!(name.as_str(), "Zone A");
    }

    #[test]
    fn region_name_rejects_blank_and_long_input() {
        assert!(RegionName::new("   ").is_err());
        assert!(RegionName::new("x".repeat(201)).is_err());
        assert!(RegionName::new("x".repeat(200)).is_ok());
    }

    #[test]
    fn region_name_deserialization_validates() {
        let err = serde_json::from_str::<RegionName>("\"\"").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn text_length_limit() {
        assert!(check_text_length(&"a".repeat(MAX_TEXT_LENGTH), "description").is_ok());
        let err = check_text_length(&"a".repeat(MAX_TEXT_LENGTH + 1), "description").unwrap_err();
        assert!(err.to_string().contains("description"));
    }
}
