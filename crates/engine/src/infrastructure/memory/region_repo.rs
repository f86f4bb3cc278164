use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geoward_domain::{Coordinate, Region, RegionId};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{RegionRepo, RepoError};

/// Regions kept in insertion order.
pub struct MemoryRegionRepo {
    regions: Mutex<Vec<Region>>,
}

impl MemoryRegionRepo {
    pub fn new() -> Self {
        Self {
            regions: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MemoryRegionRepo {
    fn default() -> Self {
        Self::new()
    }
}

fn deactivate_others(regions: &mut [Region], keep: RegionId, now: DateTime<Utc>) {
    for other in regions.iter_mut() {
        if other.id() != keep && other.is_active() {
            other.deactivate(now);
        }
    }
}

fn newest_first(mut regions: Vec<Region>) -> Vec<Region> {
    regions.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    regions
}

#[async_trait]
impl RegionRepo for MemoryRegionRepo {
    async fn get(&self, id: RegionId) -> Result<Option<Region>, RepoError> {
        let regions = self.regions.lock().await;
        Ok(regions.iter().find(|r| r.id() == id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Region>, RepoError> {
        let regions = self.regions.lock().await;
        Ok(newest_first(
            regions.iter().filter(|r| r.is_active()).cloned().collect(),
        ))
    }

    async fn create(&self, region: &Region) -> Result<(), RepoError> {
        let mut regions = self.regions.lock().await;
        // Every fallible check runs before the first write.
        if regions.iter().any(|r| r.id() == region.id()) {
            return Err(RepoError::database(
                "create_region",
                format!("region {} already exists", region.id()),
            ));
        }
        deactivate_others(&mut regions, region.id(), region.created_at());
        regions.push(region.clone());
        Ok(())
    }

    async fn update(
        &self,
        region: &Region,
        activation: Option<bool>,
    ) -> Result<Region, RepoError> {
        let mut regions = self.regions.lock().await;
        let idx = regions
            .iter()
            .position(|r| r.id() == region.id())
            .ok_or_else(|| RepoError::not_found("Region", region.id()))?;

        let now = region.updated_at();
        let mut updated = region.clone();
        if activation.unwrap_or(regions[idx].is_active()) {
            updated.activate(now);
        } else {
            updated.deactivate(now);
        }

        if activation == Some(true) {
            deactivate_others(&mut regions, region.id(), now);
        }
        regions[idx] = updated.clone();
        Ok(updated)
    }

    async fn delete(
        &self,
        id: RegionId,
        now: DateTime<Utc>,
    ) -> Result<Option<RegionId>, RepoError> {
        let mut regions = self.regions.lock().await;
        let idx = regions
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| RepoError::not_found("Region", id))?;

        let removed = regions.remove(idx);
        if !removed.is_active() {
            return Ok(None);
        }

        // max_by_key keeps the last maximum, i.e. the later insert on ties.
        let promoted = regions.iter_mut().max_by_key(|r| r.created_at());
        Ok(promoted.map(|r| {
            r.activate(now);
            r.id()
        }))
    }

    async fn find_active_containing(&self, point: Coordinate) -> Result<Vec<Region>, RepoError> {
        let regions = self.regions.lock().await;
        Ok(newest_first(
            regions
                .iter()
                .filter(|r| r.is_active() && r.contains(&point))
                .cloned()
                .collect(),
        ))
    }
}
