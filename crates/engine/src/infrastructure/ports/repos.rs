//! Repository port traits for database access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use geoward_domain::{
    Content, ContentId, Coordinate, Feedback, FeedbackId, Region, RegionId, Slider, SliderId,
};

use super::error::RepoError;

// =============================================================================
// Regions
// =============================================================================

/// Storage for geofence regions.
///
/// Implementations own the "at most one active region" invariant: every
/// method that can activate a region deactivates all others in the same
/// atomic unit, and concurrent mutations are serialized.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepo: Send + Sync {
    async fn get(&self, id: RegionId) -> Result<Option<Region>, RepoError>;

    /// Active regions, newest first.
    async fn list_active(&self) -> Result<Vec<Region>, RepoError>;

    /// Insert a new active region and deactivate every other region.
    ///
    /// Deactivated regions get `region.created_at()` as their `updated_at`.
    async fn create(&self, region: &Region) -> Result<(), RepoError>;

    /// Persist name, description and polygon of an existing region.
    ///
    /// `activation` applies the status change atomically with the field
    /// update: `Some(true)` activates this region and deactivates all others,
    /// `Some(false)` deactivates it, `None` leaves the stored status alone.
    /// Returns the region as stored after the update.
    async fn update(&self, region: &Region, activation: Option<bool>)
        -> Result<Region, RepoError>;

    /// Delete a region. If it was active, the most recently created survivor
    /// is activated with `updated_at = now`; its id is returned.
    async fn delete(
        &self,
        id: RegionId,
        now: DateTime<Utc>,
    ) -> Result<Option<RegionId>, RepoError>;

    /// Active regions whose polygon contains the point (boundary inclusive).
    async fn find_active_containing(&self, point: Coordinate) -> Result<Vec<Region>, RepoError>;
}

// =============================================================================
// Sliders
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SliderRepo: Send + Sync {
    async fn get(&self, id: SliderId) -> Result<Option<Slider>, RepoError>;
    /// Active sliders in display order.
    async fn list_active(&self) -> Result<Vec<Slider>, RepoError>;
    /// All sliders in display order.
    async fn list_all(&self) -> Result<Vec<Slider>, RepoError>;
    async fn save(&self, slider: &Slider) -> Result<(), RepoError>;
    /// Fails with `RepoError::NotFound` when nothing was deleted.
    async fn delete(&self, id: SliderId) -> Result<(), RepoError>;
}

// =============================================================================
// Content
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepo: Send + Sync {
    async fn get(&self, id: ContentId) -> Result<Option<Content>, RepoError>;
    /// Active content cards in display order.
    async fn list_active(&self) -> Result<Vec<Content>, RepoError>;
    /// All content cards in display order.
    async fn list_all(&self) -> Result<Vec<Content>, RepoError>;
    async fn save(&self, content: &Content) -> Result<(), RepoError>;
    /// Fails with `RepoError::NotFound` when nothing was deleted.
    async fn delete(&self, id: ContentId) -> Result<(), RepoError>;
}

// =============================================================================
// Feedback
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackRepo: Send + Sync {
    async fn save(&self, feedback: &Feedback) -> Result<(), RepoError>;
    /// Newest first.
    async fn list(&self) -> Result<Vec<Feedback>, RepoError>;
    async fn delete(&self, id: FeedbackId) -> Result<(), RepoError>;
}
