//! Content card CRUD operations.

use std::sync::Arc;

use geoward_domain::{Content, ContentId};
use serde::Deserialize;

use crate::infrastructure::ports::{ClockPort, ContentRepo};

use super::ManagementError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContentInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
}

pub struct ContentCrud {
    contents: Arc<dyn ContentRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ContentCrud {
    pub fn new(contents: Arc<dyn ContentRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { contents, clock }
    }

    pub async fn list_active(&self) -> Result<Vec<Content>, ManagementError> {
        Ok(self.contents.list_active().await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Content>, ManagementError> {
        Ok(self.contents.list_all().await?)
    }

    pub async fn create(&self, input: CreateContentInput) -> Result<Content, ManagementError> {
        let content = Content::new(
            input.title.as_deref().unwrap_or_default(),
            input.content.as_deref().unwrap_or_default(),
            input.order,
            self.clock.now(),
        )?;
        self.contents.save(&content).await?;
        tracing::info!(
            content_id = %content.id(),
            word_count = content.word_count(),
            "Content created"
        );
        Ok(content)
    }

    /// Apply a partial update. A body over the word limit rejects the whole
    /// update.
    pub async fn update(
        &self,
        id: ContentId,
        input: UpdateContentInput,
    ) -> Result<Content, ManagementError> {
        let mut content = self
            .contents
            .get(id)
            .await?
            .ok_or_else(|| ManagementError::NotFound {
                entity_type: "Content",
                id: id.to_string(),
            })?;

        let now = self.clock.now();
        if let Some(title) = input.title {
            content.set_title(&title, now)?;
        }
        if let Some(body) = input.content {
            content.set_content(&body, now)?;
        }
        if let Some(order) = input.order {
            content.set_order(order, now);
        }
        if let Some(is_active) = input.is_active {
            content.set_active(is_active, now);
        }

        self.contents.save(&content).await?;
        Ok(content)
    }

    pub async fn delete(&self, id: ContentId) -> Result<(), ManagementError> {
        self.contents.delete(id).await?;
        tracing::info!(content_id = %id, "Content deleted");
        Ok(())
    }
}
