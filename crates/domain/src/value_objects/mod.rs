//! Value objects - immutable, validated building blocks

mod coordinate;
mod names;
mod polygon;

pub use coordinate::Coordinate;
pub use names::{check_text_length, RegionName, MAX_TEXT_LENGTH};
pub use polygon::{BoundingBox, GeoJsonPolygon, Polygon, Ring, MIN_RING_VERTICES, POLYGON_TYPE};
