use async_trait::async_trait;
use geoward_domain::{Feedback, FeedbackId};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{FeedbackRepo, RepoError};

pub struct MemoryFeedbackRepo {
    entries: Mutex<Vec<Feedback>>,
}

impl MemoryFeedbackRepo {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryFeedbackRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedbackRepo for MemoryFeedbackRepo {
    async fn save(&self, feedback: &Feedback) -> Result<(), RepoError> {
        self.entries.lock().await.push(feedback.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Feedback>, RepoError> {
        let mut entries = self.entries.lock().await.clone();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn delete(&self, id: FeedbackId) -> Result<(), RepoError> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|f| f.id != id);
        if entries.len() == before {
            return Err(RepoError::not_found("Feedback", id));
        }
        Ok(())
    }
}
