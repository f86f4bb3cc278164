use async_trait::async_trait;
use geoward_domain::{sort_contents_for_display, Content, ContentId};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{ContentRepo, RepoError};

pub struct MemoryContentRepo {
    contents: Mutex<Vec<Content>>,
}

impl MemoryContentRepo {
    pub fn new() -> Self {
        Self {
            contents: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryContentRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepo for MemoryContentRepo {
    async fn get(&self, id: ContentId) -> Result<Option<Content>, RepoError> {
        let contents = self.contents.lock().await;
        Ok(contents.iter().find(|c| c.id() == id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Content>, RepoError> {
        let mut active: Vec<Content> = {
            let contents = self.contents.lock().await;
            contents.iter().filter(|c| c.is_active()).cloned().collect()
        };
        sort_contents_for_display(&mut active);
        Ok(active)
    }

    async fn list_all(&self) -> Result<Vec<Content>, RepoError> {
        let mut all = self.contents.lock().await.clone();
        sort_contents_for_display(&mut all);
        Ok(all)
    }

    async fn save(&self, content: &Content) -> Result<(), RepoError> {
        let mut contents = self.contents.lock().await;
        match contents.iter_mut().find(|c| c.id() == content.id()) {
            Some(existing) => *existing = content.clone(),
            None => contents.push(content.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: ContentId) -> Result<(), RepoError> {
        let mut contents = self.contents.lock().await;
        let before = contents.len();
        contents.retain(|c| c.id() != id);
        if contents.len() == before {
            return Err(RepoError::not_found("Content", id));
        }
        Ok(())
    }
}
