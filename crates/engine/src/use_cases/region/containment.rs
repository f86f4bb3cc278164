//! Point-in-region check against the active geofence.

use std::sync::Arc;

use geoward_domain::{Coordinate, Region};
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::RegionRepo;
use crate::use_cases::validation::require_present;

use super::RegionError;

#[derive(Debug, Default, Deserialize)]
pub struct CheckPointInput {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainmentResult {
    pub is_inside: bool,
    pub matching_areas: Vec<Region>,
}

pub struct CheckPoint {
    regions: Arc<dyn RegionRepo>,
}

impl CheckPoint {
    pub fn new(regions: Arc<dyn RegionRepo>) -> Self {
        Self { regions }
    }

    /// Whether the point falls inside (or on the edge of) any active region.
    pub async fn execute(&self, input: CheckPointInput) -> Result<ContainmentResult, RegionError> {
        let latitude = require_present(input.latitude, "latitude")?;
        let longitude = require_present(input.longitude, "longitude")?;
        let point = Coordinate::new(longitude, latitude)?;

        let matching_areas = self.regions.find_active_containing(point).await?;
        Ok(ContainmentResult {
            is_inside: !matching_areas.is_empty(),
            matching_areas,
        })
    }
}
