//! Content entity - a short text card shown alongside the image sliders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::required_text;
use crate::error::DomainError;
use crate::ids::ContentId;
use crate::value_objects::check_text_length;

/// Maximum number of whitespace-separated words in a content body.
pub const MAX_CONTENT_WORDS: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    id: ContentId,
    title: String,
    content: String,
    /// Derived from `content`; kept in sync by every constructor and setter.
    word_count: usize,
    order: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Content {
    /// Create an active content card. `order` defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the title or body is blank, or
    /// the body has more than [`MAX_CONTENT_WORDS`] words.
    pub fn new(
        title: &str,
        content: &str,
        order: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let (title, content) = match (required_text(title), required_text(content)) {
            (Some(title), Some(content)) => (title, content),
            _ => return Err(DomainError::validation("Title and content are required")),
        };
        let word_count = validate_body(&content)?;

        Ok(Self {
            id: ContentId::new(),
            title,
            content,
            word_count,
            order: order.unwrap_or(0),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn from_storage(
        id: ContentId,
        title: String,
        content: String,
        order: i64,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let word_count = count_words(&content);
        Self {
            id,
            title,
            content,
            word_count,
            order,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> ContentId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn order(&self) -> i64 {
        self.order
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.title =
            required_text(title).ok_or_else(|| DomainError::validation("Title is required"))?;
        self.updated_at = now;
        Ok(())
    }

    /// Replace the body, re-checking the word limit.
    pub fn set_content(&mut self, content: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        let content =
            required_text(content).ok_or_else(|| DomainError::validation("Content is required"))?;
        self.word_count = validate_body(&content)?;
        self.content = content;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_order(&mut self, order: i64, now: DateTime<Utc>) {
        self.order = order;
        self.updated_at = now;
    }

    pub fn set_active(&mut self, is_active: bool, now: DateTime<Utc>) {
        self.is_active = is_active;
        self.updated_at = now;
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn validate_body(content: &str) -> Result<usize, DomainError> {
    check_text_length(content, "Content")?;
    let words = count_words(content);
    if words > MAX_CONTENT_WORDS {
        return Err(DomainError::validation(format!(
            "Content cannot exceed {} words",
            MAX_CONTENT_WORDS
        )));
    }
    Ok(words)
}

/// Orders content cards for display: `order` ascending, newest first within a tie.
pub fn sort_for_display(contents: &mut [Content]) {
    contents.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn thirty_words_is_the_limit() {
        let card = Content::new("Welcome", &words(30), None, now()).unwrap();
        assert_eq!(card.word_count(), 30);
        assert!(card.is_active());
        assert_eq!(card.order(), 0);

        let err = Content::new("Welcome", &words(31), None, now()).unwrap_err();
        assert!(err.to_string().contains("30 words"));
    }

    #[test]
    fn words_are_split_on_any_whitespace() {
        let card = Content::new(" Hours ", "  open\tdaily \n 9  to 5 ", Some(2), now()).unwrap();
        assert_eq!(card.title(), "Hours");
        assert_eq!(card.content(), "open\tdaily \n 9  to 5");
        assert_eq!(card.word_count(), 5);
    }

    #[test]
    fn title_and_content_are_required() {
        assert!(Content::new("", "body", None, now()).is_err());
        assert!(Content::new("Title", "   ", None, now()).is_err());
    }

    #[test]
    fn set_content_enforces_limit_and_keeps_old_body_on_error() {
        let mut card = Content::new("Welcome", "short body", None, now()).unwrap();
        let later = now() + Duration::minutes(5);

        assert!(card.set_content(&words(31), later).is_err());
        assert_eq!(card.content(), "short body");
        assert_eq!(card.word_count(), 2);
        assert_eq!(card.updated_at(), now());

        card.set_content(&words(30), later).unwrap();
        assert_eq!(card.word_count(), 30);
        assert_eq!(card.updated_at(), later);
    }

    #[test]
    fn serializes_word_count() {
        let card = Content::new("Welcome", "hello there", None, now()).unwrap();
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["wordCount"], 2);
        assert_eq!(json["isActive"], true);
    }

    #[test]
    fn display_order_then_newest() {
        let early = Content::new("early", "a", Some(1), now()).unwrap();
        let late = Content::new("late", "b", Some(1), now() + Duration::hours(1)).unwrap();
        let first = Content::new("first", "c", Some(0), now()).unwrap();

        let mut cards = vec![early, late, first];
        sort_for_display(&mut cards);

        let titles: Vec<&str> = cards.iter().map(Content::title).collect();
        assert_eq!(titles, vec!["first", "late", "early"]);
    }
}
