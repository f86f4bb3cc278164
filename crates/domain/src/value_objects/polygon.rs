//! Geofence polygons.
//!
//! A [`Polygon`] is built from GeoJSON input (`{"type": "Polygon",
//! "coordinates": [[[lng, lat], ...], ...]}`) and is valid by construction:
//! - the `type` marker is `"Polygon"`
//! - there is at least one ring; the first is the outer boundary, the rest
//!   are holes
//! - every ring has at least 3 distinct vertices
//! - every ring is closed (first point == last point)

use std::collections::HashSet;

use geo::Intersects;
use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use crate::error::DomainError;

/// GeoJSON geometry marker accepted for region polygons.
pub const POLYGON_TYPE: &str = "Polygon";

/// Minimum number of distinct vertices in a ring, not counting the closing point.
pub const MIN_RING_VERTICES: usize = 3;

/// Unvalidated GeoJSON polygon as it arrives on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPolygon {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<Vec<Vec<f64>>>,
}

/// A closed ring of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring(Vec<Coordinate>);

impl Ring {
    /// Validates a ring and closes it when the last point differs from the
    /// first. An already-closed ring is returned unchanged.
    pub fn closed(points: Vec<Coordinate>) -> Result<Self, DomainError> {
        let already_closed = points.len() > 1 && points.first() == points.last();
        let open = if already_closed {
            &points[..points.len() - 1]
        } else {
            &points[..]
        };

        let distinct: HashSet<(u64, u64)> = open.iter().map(Coordinate::bits).collect();
        if distinct.len() < MIN_RING_VERTICES {
            return Err(DomainError::validation(format!(
                "ring must have at least {} distinct vertices, got {}",
                MIN_RING_VERTICES,
                distinct.len()
            )));
        }

        let mut points = points;
        if !already_closed {
            let first = points[0];
            points.push(first);
        }
        Ok(Self(points))
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.0
    }

    fn to_line_string(&self) -> geo::LineString<f64> {
        self.0.iter().map(|c| geo::Coord::from(*c)).collect()
    }
}

/// Axis-aligned bounds of a polygon's outer ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south_west: Coordinate,
    pub north_east: Coordinate,
}

impl BoundingBox {
    pub fn contains(&self, point: &Coordinate) -> bool {
        (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
            && (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
    }
}

/// A validated, closed geofence polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonPolygon", into = "GeoJsonPolygon")]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    /// Validates GeoJSON input and closes every ring.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` naming the first offending ring or
    /// point.
    pub fn from_geojson(input: GeoJsonPolygon) -> Result<Self, DomainError> {
        if input.kind != POLYGON_TYPE {
            return Err(DomainError::validation(format!(
                "polygon type must be \"{}\", got \"{}\"",
                POLYGON_TYPE, input.kind
            )));
        }
        if input.coordinates.is_empty() {
            return Err(DomainError::validation(
                "polygon must contain at least one ring",
            ));
        }

        let rings = input
            .coordinates
            .into_iter()
            .enumerate()
            .map(|(ring_idx, ring)| {
                let points = ring
                    .iter()
                    .enumerate()
                    .map(|(point_idx, pair)| {
                        Coordinate::from_pair(pair).map_err(|e| {
                            DomainError::validation(format!(
                                "ring {} point {}: {}",
                                ring_idx,
                                point_idx,
                                strip_prefix(&e)
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ring::closed(points).map_err(|e| {
                    DomainError::validation(format!("ring {}: {}", ring_idx, strip_prefix(&e)))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rings })
    }

    /// Outer boundary.
    pub fn exterior(&self) -> &Ring {
        &self.rings[0]
    }

    /// Holes, if any.
    pub fn interiors(&self) -> &[Ring] {
        &self.rings[1..]
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let points = self.exterior().points();
        let first = points[0];
        let (mut min, mut max) = (first, first);
        for p in &points[1..] {
            min.longitude = min.longitude.min(p.longitude);
            min.latitude = min.latitude.min(p.latitude);
            max.longitude = max.longitude.max(p.longitude);
            max.latitude = max.latitude.max(p.latitude);
        }
        BoundingBox {
            south_west: min,
            north_east: max,
        }
    }

    /// Planar point-in-polygon test over longitude/latitude.
    ///
    /// Points on the outer boundary or on a hole's boundary count as inside;
    /// points strictly within a hole do not.
    pub fn contains(&self, point: &Coordinate) -> bool {
        if !self.bounding_box().contains(point) {
            return false;
        }
        let shape = geo::Polygon::new(
            self.exterior().to_line_string(),
            self.interiors().iter().map(Ring::to_line_string).collect(),
        );
        shape.intersects(&geo::Coord::from(*point))
    }
}

impl TryFrom<GeoJsonPolygon> for Polygon {
    type Error = DomainError;

    fn try_from(value: GeoJsonPolygon) -> Result<Self, Self::Error> {
        Self::from_geojson(value)
    }
}

impl From<Polygon> for GeoJsonPolygon {
    fn from(polygon: Polygon) -> Self {
        Self {
            kind: POLYGON_TYPE.to_string(),
            coordinates: polygon
                .rings
                .into_iter()
                .map(|ring| {
                    ring.0
                        .into_iter()
                        .map(|c| vec![c.longitude, c.latitude])
                        .collect()
                })
                .collect(),
        }
    }
}

fn strip_prefix(err: &DomainError) -> String {
    match err {
        DomainError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}
