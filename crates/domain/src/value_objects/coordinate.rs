//! Geographic coordinate pairs.
//!
//! On the wire a coordinate is the GeoJSON pair `[longitude, latitude]`.
//! Inside the domain it always carries named fields so the two axes cannot be
//! transposed by accident.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A WGS-84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when either value is not finite or
    /// falls outside longitude [-180, 180] / latitude [-90, 90].
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(DomainError::validation("coordinates must be finite numbers"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::validation(format!(
                "longitude {} is outside [-180, 180]",
                longitude
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::validation(format!(
                "latitude {} is outside [-90, 90]",
                latitude
            )));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Builds a coordinate from a GeoJSON position, which must hold exactly
    /// two values in `[lng, lat]` order.
    pub fn from_pair(pair: &[f64]) -> Result<Self, DomainError> {
        match pair {
            [longitude, latitude] => Self::new(*longitude, *latitude),
            _ => Err(DomainError::validation(format!(
                "coordinate pair must have exactly 2 values, got {}",
                pair.len()
            ))),
        }
    }

    /// Key used to compare vertices for distinctness. `-0.0` and `0.0` map to
    /// the same key.
    pub(crate) fn bits(&self) -> (u64, u64) {
        ((self.longitude + 0.0).to_bits(), (self.latitude + 0.0).to_bits())
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = DomainError;

    fn try_from(pair: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_pair(&pair)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.longitude, c.latitude]
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}
