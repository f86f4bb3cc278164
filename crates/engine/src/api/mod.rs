//! API layer - HTTP entry points.

pub mod auth;
pub mod error;
pub mod http;

mod content_routes;
mod feedback_routes;
mod region_routes;
mod slider_routes;

use std::str::FromStr;

use geoward_domain::DomainError;

use error::ApiError;

/// Parse a path id, rejecting malformed values with 400.
fn parse_id<T>(raw: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    raw.parse().map_err(|e: DomainError| ApiError::BadRequest(e.to_string()))
}
