//! Text normalization shared by entities.
//!
//! Free-text fields are trimmed before storage; optional fields collapse to
//! `None` when nothing is left after trimming.

/// Trims an optional text field, mapping blank input to `None`.
///
/// ```
/// use geoward_domain::common::trimmed_or_none;
///
/// assert_eq!(trimmed_or_none(Some("  hi ".to_string())), Some("hi".to_string()));
/// assert_eq!(trimmed_or_none(Some("   ".to_string())), None);
/// assert_eq!(trimmed_or_none(None), None);
/// ```
pub fn trimmed_or_none(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Trims a required text field, returning `None` when it is blank.
pub fn required_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
