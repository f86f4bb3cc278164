//! Feedback submission and moderation.

use std::sync::Arc;

use geoward_domain::{Feedback, FeedbackId};
use serde::Deserialize;

use crate::infrastructure::ports::{ClockPort, FeedbackRepo};

use super::ManagementError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackInput {
    pub user_name: Option<String>,
    pub message: Option<String>,
}

pub struct FeedbackCrud {
    feedback: Arc<dyn FeedbackRepo>,
    clock: Arc<dyn ClockPort>,
}

impl FeedbackCrud {
    pub fn new(feedback: Arc<dyn FeedbackRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { feedback, clock }
    }

    /// Record feedback from the calling user.
    pub async fn create(
        &self,
        input: CreateFeedbackInput,
        user_id: Option<String>,
    ) -> Result<Feedback, ManagementError> {
        let entry = Feedback::new(
            input.user_name.as_deref().unwrap_or_default(),
            input.message.as_deref().unwrap_or_default(),
            user_id,
            self.clock.now(),
        )?;
        self.feedback.save(&entry).await?;
        tracing::info!(feedback_id = %entry.id, "Feedback received");
        Ok(entry)
    }

    pub async fn list(&self) -> Result<Vec<Feedback>, ManagementError> {
        Ok(self.feedback.list().await?)
    }

    pub async fn delete(&self, id: FeedbackId) -> Result<(), ManagementError> {
        self.feedback.delete(id).await?;
        Ok(())
    }
}
