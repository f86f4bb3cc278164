//! Geoward domain: geofence regions, polygons, sliders, content cards and
//! feedback.
//!
//! Pure types with their invariants. No I/O lives here.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    sort_contents_for_display, sort_sliders_for_display, Content, Feedback, Region, Slider,
    MAX_CONTENT_WORDS,
};
pub use error::DomainError;
pub use ids::{ContentId, FeedbackId, RegionId, SliderId};
pub use value_objects::{
    check_text_length, BoundingBox, Coordinate, GeoJsonPolygon, Polygon, RegionName, Ring,
    MAX_TEXT_LENGTH, MIN_RING_VERTICES, POLYGON_TYPE,
};
