//! Slider CRUD operations.

use std::sync::Arc;

use geoward_domain::{Slider, SliderId};
use serde::Deserialize;

use crate::infrastructure::ports::{ClockPort, SliderRepo};

use super::ManagementError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSliderInput {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub order: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSliderInput {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub order: Option<i64>,
    pub is_active: Option<bool>,
}

pub struct SliderCrud {
    sliders: Arc<dyn SliderRepo>,
    clock: Arc<dyn ClockPort>,
}

impl SliderCrud {
    pub fn new(sliders: Arc<dyn SliderRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { sliders, clock }
    }

    pub async fn list_active(&self) -> Result<Vec<Slider>, ManagementError> {
        Ok(self.sliders.list_active().await?)
    }

    pub async fn list_all(&self) -> Result<Vec<Slider>, ManagementError> {
        Ok(self.sliders.list_all().await?)
    }

    pub async fn create(&self, input: CreateSliderInput) -> Result<Slider, ManagementError> {
        let slider = Slider::new(
            input.image_url.as_deref().unwrap_or_default(),
            input.title,
            input.order,
            self.clock.now(),
        )?;
        self.sliders.save(&slider).await?;
        tracing::info!(slider_id = %slider.id(), order = slider.order(), "Slider created");
        Ok(slider)
    }

    pub async fn update(
        &self,
        id: SliderId,
        input: UpdateSliderInput,
    ) -> Result<Slider, ManagementError> {
        let mut slider = self
            .sliders
            .get(id)
            .await?
            .ok_or_else(|| ManagementError::NotFound {
                entity_type: "Slider",
                id: id.to_string(),
            })?;

        let now = self.clock.now();
        if let Some(image_url) = input.image_url {
            slider.set_image_url(&image_url, now)?;
        }
        if let Some(title) = input.title {
            slider.set_title(Some(title), now);
        }
        if let Some(order) = input.order {
            slider.set_order(order, now);
        }
        if let Some(is_active) = input.is_active {
            slider.set_active(is_active, now);
        }

        self.sliders.save(&slider).await?;
        Ok(slider)
    }

    pub async fn delete(&self, id: SliderId) -> Result<(), ManagementError> {
        self.sliders.delete(id).await?;
        tracing::info!(slider_id = %id, "Slider deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockSliderRepo, RepoError};
    use chrono::{TimeZone, Utc};

    fn crud(repo: MockSliderRepo) -> SliderCrud {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        SliderCrud::new(Arc::new(repo), Arc::new(FixedClock(now)))
    }

    #[tokio::test]
    async fn create_requires_image_url() {
        let err = crud(MockSliderRepo::new())
            .create(CreateSliderInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::Validation(_)));
    }

    #[tokio::test]
    async fn update_rejects_blank_image_url_without_saving() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let existing = Slider::new("/a.png", None, None, now).unwrap();
        let id = existing.id();

        let mut repo = MockSliderRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(existing.clone())));

        let err = crud(repo)
            .update(
                id,
                UpdateSliderInput {
                    image_url: Some(" ".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ManagementError::Validation(_)));
    }

    #[tokio::test]
    async fn update_applies_partial_fields() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let existing = Slider::new("/a.png", Some("Old".into()), Some(3), now).unwrap();
        let id = existing.id();

        let mut repo = MockSliderRepo::new();
        repo.expect_get()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|s: &Slider| s.order() == 1 && !s.is_active() && s.title() == Some("Old"))
            .times(1)
            .returning(|_| Ok(()));

        let updated = crud(repo)
            .update(
                id,
                UpdateSliderInput {
                    order: Some(1),
                    is_active: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.image_url(), "/a.png");
    }

    #[tokio::test]
    async fn delete_missing_slider_is_not_found() {
        let mut repo = MockSliderRepo::new();
        repo.expect_delete()
            .returning(|id| Err(RepoError::not_found("Slider", id)));

        let err = crud(repo).delete(SliderId::new()).await.unwrap_err();
        assert!(matches!(
            err,
            ManagementError::NotFound {
                entity_type: "Slider",
                ..
            }
        ));
    }
}
