//! Region create, update, delete and listing.

use std::sync::Arc;

use geoward_domain::{GeoJsonPolygon, Polygon, Region, RegionId, RegionName};
use serde::Deserialize;

use crate::infrastructure::ports::{ClockPort, RegionRepo};
use crate::use_cases::validation::require_present;

use super::RegionError;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegionInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub polygon: Option<GeoJsonPolygon>,
}

/// Partial update. Absent fields are left unchanged; an empty description
/// clears it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub polygon: Option<GeoJsonPolygon>,
    pub is_active: Option<bool>,
}

pub struct RegionCrud {
    regions: Arc<dyn RegionRepo>,
    clock: Arc<dyn ClockPort>,
}

impl RegionCrud {
    pub fn new(regions: Arc<dyn RegionRepo>, clock: Arc<dyn ClockPort>) -> Self {
        Self { regions, clock }
    }

    pub async fn list_active(&self) -> Result<Vec<Region>, RegionError> {
        Ok(self.regions.list_active().await?)
    }

    /// Create a region and make it the only active one.
    pub async fn create(&self, input: CreateRegionInput) -> Result<Region, RegionError> {
        let name = RegionName::new(require_present(input.name, "name")?)?;
        let polygon = Polygon::from_geojson(require_present(input.polygon, "polygon")?)?;

        let region = Region::new(name, input.description, polygon, self.clock.now())?;
        self.regions.create(&region).await?;

        tracing::info!(
            region_id = %region.id(),
            name = %region.name(),
            rings = region.polygon().rings().len(),
            "Region created and activated"
        );
        Ok(region)
    }

    /// Apply a partial update.
    ///
    /// Every supplied field is validated before anything is written.
    /// `isActive: true` deactivates all other regions in the same write.
    pub async fn update(
        &self,
        id: RegionId,
        input: UpdateRegionInput,
    ) -> Result<Region, RegionError> {
        let name = input.name.map(RegionName::new).transpose()?;
        let polygon = input.polygon.map(Polygon::from_geojson).transpose()?;

        let mut region = self
            .regions
            .get(id)
            .await?
            .ok_or_else(|| RegionError::NotFound(id.to_string()))?;

        let now = self.clock.now();
        if let Some(description) = input.description {
            region.set_description(Some(description), now)?;
        }
        if let Some(name) = name {
            region.rename(name, now);
        }
        if let Some(polygon) = polygon {
            region.set_polygon(polygon, now);
        }
        match input.is_active {
            Some(true) => region.activate(now),
            Some(false) => region.deactivate(now),
            None => {}
        }

        let stored = self.regions.update(&region, input.is_active).await?;
        tracing::info!(
            region_id = %stored.id(),
            is_active = stored.is_active(),
            "Region updated"
        );
        Ok(stored)
    }

    /// Delete a region, promoting the most recently created survivor when
    /// the deleted region was active.
    pub async fn delete(&self, id: RegionId) -> Result<Option<RegionId>, RegionError> {
        let promoted = self.regions.delete(id, self.clock.now()).await?;
        match promoted {
            Some(promoted_id) => tracing::info!(
                region_id = %id,
                promoted_id = %promoted_id,
                "Active region deleted; promoted most recent survivor"
            ),
            None => tracing::info!(region_id = %id, "Region deleted"),
        }
        Ok(promoted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockRegionRepo, RepoError};
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::predicate::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn square() -> GeoJsonPolygon {
        GeoJsonPolygon {
            kind: "Polygon".into(),
            coordinates: vec![vec![
                vec![0.0, 0.0],
                vec![0.0, 10.0],
                vec![10.0, 10.0],
                vec![10.0, 0.0],
            ]],
        }
    }

    fn stored_region() -> Region {
        Region::new(
            RegionName::new("Zone A").unwrap(),
            Some("gate".into()),
            Polygon::from_geojson(square()).unwrap(),
            now(),
        )
        .unwrap()
    }

    fn crud(repo: MockRegionRepo) -> RegionCrud {
        RegionCrud::new(Arc::new(repo), Arc::new(FixedClock(now())))
    }

    #[tokio::test]
    async fn create_closes_ring_and_activates() {
        let mut repo = MockRegionRepo::new();
        repo.expect_create()
            .withf(|r: &Region| {
                r.is_active() && r.polygon().exterior().points().len() == 5 && r.created_at() == now()
            })
            .times(1)
            .returning(|_| Ok(()));

        let region = crud(repo)
            .create(CreateRegionInput {
                name: Some("Zone A".into()),
                description: None,
                polygon: Some(square()),
            })
            .await
            .unwrap();

        assert!(region.is_active());
        assert_eq!(region.name().as_str(), "Zone A");
    }

    #[tokio::test]
    async fn create_rejects_missing_fields_without_writing() {
        // No expectations: any repo call would panic.
        let use_case = crud(MockRegionRepo::new());

        let err = use_case
            .create(CreateRegionInput {
                name: None,
                description: None,
                polygon: Some(square()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RegionError::Validation(ref m) if m.contains("name")));

        let err = use_case
            .create(CreateRegionInput {
                name: Some("Zone A".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RegionError::Validation(ref m) if m.contains("polygon")));
    }

    #[tokio::test]
    async fn create_rejects_degenerate_ring() {
        let use_case = crud(MockRegionRepo::new());
        let line = GeoJsonPolygon {
            kind: "Polygon".into(),
            coordinates: vec![vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![0.0, 0.0]]],
        };

        let err = use_case
            .create(CreateRegionInput {
                name: Some("Line".into()),
                description: None,
                polygon: Some(line),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RegionError::Validation(_)));
    }

    #[tokio::test]
    async fn update_with_invalid_polygon_applies_nothing() {
        // Validation happens before the region is even loaded.
        let use_case = crud(MockRegionRepo::new());
        let bad = GeoJsonPolygon {
            kind: "Polygon".into(),
            coordinates: vec![vec![vec![0.0, 0.0], vec![1.0, 1.0]]],
        };

        let err = use_case
            .update(
                RegionId::new(),
                UpdateRegionInput {
                    name: Some("Renamed".into()),
                    polygon: Some(bad),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RegionError::Validation(_)));
    }

    #[tokio::test]
    async fn update_unknown_region_is_not_found() {
        let mut repo = MockRegionRepo::new();
        repo.expect_get().returning(|_| Ok(None));

        let err = crud(repo)
            .update(RegionId::new(), UpdateRegionInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RegionError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_passes_activation_through() {
        let existing = stored_region();
        let id = existing.id();

        let mut repo = MockRegionRepo::new();
        let loaded = existing.clone();
        repo.expect_get()
            .with(eq(id))
            .returning(move |_| Ok(Some(loaded.clone())));
        repo.expect_update()
            .withf(|r: &Region, activation: &Option<bool>| {
                r.description().is_none() && *activation == Some(true)
            })
            .times(1)
            .returning(|r, _| Ok(r.clone()));

        let updated = crud(repo)
            .update(
                id,
                UpdateRegionInput {
                    description: Some("   ".into()),
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.is_active());
        assert_eq!(updated.description(), None);
    }

    #[tokio::test]
    async fn delete_maps_missing_region_to_not_found() {
        let mut repo = MockRegionRepo::new();
        repo.expect_delete()
            .returning(|id, _| Err(RepoError::not_found("Region", id)));

        let err = crud(repo).delete(RegionId::new()).await.unwrap_err();
        assert!(matches!(err, RegionError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_promoted_region() {
        let promoted = RegionId::new();
        let mut repo = MockRegionRepo::new();
        repo.expect_delete()
            .with(always(), eq(now()))
            .returning(move |_, _| Ok(Some(promoted)));

        let result = crud(repo).delete(RegionId::new()).await.unwrap();
        assert_eq!(result, Some(promoted));
    }
}
