//! Region entity - a named geofence polygon.
//!
//! At most one region is active across the whole collection. The entity only
//! tracks its own flag; exclusivity is enforced by the repository, which
//! deactivates siblings in the same transaction that activates a region.
//!
//! # Neo4j Node
//! - `(:Region {id, name, description, polygon, is_active, bbox_sw, bbox_ne,
//!   created_at, updated_at})`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::trimmed_or_none;
use crate::error::DomainError;
use crate::ids::RegionId;
use crate::value_objects::{check_text_length, Coordinate, Polygon, RegionName};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    id: RegionId,
    name: RegionName,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    description: Option<String>,
    polygon: Polygon,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Region {
    /// Create a new region. New regions are always active.
    pub fn new(
        name: RegionName,
        description: Option<String>,
        polygon: Polygon,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let description = normalize_description(description)?;
        Ok(Self {
            id: RegionId::new(),
            name,
            description,
            polygon,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a region from stored fields.
    pub fn from_storage(
        id: RegionId,
        name: RegionName,
        description: Option<String>,
        polygon: Polygon,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            polygon,
            is_active,
            created_at,
            updated_at,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────────────

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn name(&self) -> &RegionName {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
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

    // ── Mutations ──────────────────────────────────────────────────────────

    pub fn rename(&mut self, name: RegionName, now: DateTime<Utc>) {
        self.name = name;
        self.updated_at = now;
    }

    /// Blank descriptions clear the field.
    pub fn set_description(
        &mut self,
        description: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.description = normalize_description(description)?;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_polygon(&mut self, polygon: Polygon, now: DateTime<Utc>) {
        self.polygon = polygon;
        self.updated_at = now;
    }

    pub fn activate(&mut self, now: DateTime<Utc>) {
        self.is_active = true;
        self.updated_at = now;
    }

    pub fn deactivate(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.updated_at = now;
    }

    /// Whether the point lies inside or on the boundary of this region.
    pub fn contains(&self, point: &Coordinate) -> bool {
        self.polygon.contains(point)
    }
}

fn normalize_description(description: Option<String>) -> Result<Option<String>, DomainError> {
    let description = trimmed_or_none(description);
    if let Some(text) = &description {
        check_text_length(text, "Description")?;
    }
    Ok(description)
}
