use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::required_text;
use crate::error::DomainError;
use crate::ids::FeedbackId;
use crate::value_objects::check_text_length;

/// Feedback submitted by an app user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub user_name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Feedback {
    pub fn new(
        user_name: &str,
        message: &str,
        user_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let user_name = required_text(user_name)
            .ok_or_else(|| DomainError::validation("User name and message are required"))?;
        let message = required_text(message)
            .ok_or_else(|| DomainError::validation("User name and message are required"))?;
        check_text_length(&message, "Message")?;

        Ok(Self {
            id: FeedbackId::new(),
            user_name,
            message,
            user_id,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fields_are_trimmed_and_required() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let fb = Feedback::new(" Ana ", " Great app ", Some("u-1".into()), now).unwrap();
        assert_eq!(fb.user_name, "Ana");
        assert_eq!(fb.message, "Great app");
        assert_eq!(fb.user_id.as_deref(), Some("u-1"));

        assert!(Feedback::new("Ana", "   ", None, now).is_err());
        assert!(Feedback::new("", "hello", None, now).is_err());
    }
}
