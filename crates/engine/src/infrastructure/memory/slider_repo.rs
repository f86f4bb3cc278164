use async_trait::async_trait;
use geoward_domain::{sort_sliders_for_display, Slider, SliderId};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{RepoError, SliderRepo};

pub struct MemorySliderRepo {
    sliders: Mutex<Vec<Slider>>,
}

impl MemorySliderRepo {
    pub fn new() -> Self {
        Self {
            sliders: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemorySliderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SliderRepo for MemorySliderRepo {
    async fn get(&self, id: SliderId) -> Result<Option<Slider>, RepoError> {
        let sliders = self.sliders.lock().await;
        Ok(sliders.iter().find(|s| s.id() == id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Slider>, RepoError> {
        let mut active: Vec<Slider> = {
            let sliders = self.sliders.lock().await;
            sliders.iter().filter(|s| s.is_active()).cloned().collect()
        };
        sort_sliders_for_display(&mut active);
        Ok(active)
    }

    async fn list_all(&self) -> Result<Vec<Slider>, RepoError> {
        let mut all = self.sliders.lock().await.clone();
        sort_sliders_for_display(&mut all);
        Ok(all)
    }

    async fn save(&self, slider: &Slider) -> Result<(), RepoError> {
        let mut sliders = self.sliders.lock().await;
        match sliders.iter_mut().find(|s| s.id() == slider.id()) {
            Some(existing) => *existing = slider.clone(),
            None => sliders.push(slider.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: SliderId) -> Result<(), RepoError> {
        let mut sliders = self.sliders.lock().await;
        let before = sliders.len();
        sliders.retain(|s| s.id() != id);
        if sliders.len() == before {
            return Err(RepoError::not_found("Slider", id));
        }
        Ok(())
    }
}
