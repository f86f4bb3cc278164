//! Slider entity - an image banner shown by the mobile app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{required_text, trimmed_or_none};
use crate::error::DomainError;
use crate::ids::SliderId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    id: SliderId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    title: Option<String>,
    image_url: String,
    order: i64,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Slider {
    /// Create an active slider. `order` defaults to 0.
    pub fn new(
        image_url: &str,
        title: Option<String>,
        order: Option<i64>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: SliderId::new(),
            title: trimmed_or_none(title),
            image_url: validate_image_url(image_url)?,
            order: order.unwrap_or(0),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn from_storage(
        id: SliderId,
        title: Option<String>,
        image_url: String,
        order: i64,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            image_url,
            order,
            is_active,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> SliderId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
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

    pub fn set_title(&mut self, title: Option<String>, now: DateTime<Utc>) {
        self.title = trimmed_or_none(title);
        self.updated_at = now;
    }

    pub fn set_image_url(&mut self, image_url: &str, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.image_url = validate_image_url(image_url)?;
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

fn validate_image_url(image_url: &str) -> Result<String, DomainError> {
    required_text(image_url).ok_or_else(|| DomainError::validation("Image URL is required"))
}

/// Orders sliders for display: `order` ascending, newest first within a tie.
pub fn sort_for_display(sliders: &mut [Slider]) {
    sliders.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
