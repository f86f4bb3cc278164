//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Database access (Neo4j in production, in-memory for development and tests)
//! - Clock (for testing)

mod error;
mod repos;
mod testing;

pub use error::RepoError;
pub use repos::{ContentRepo, FeedbackRepo, RegionRepo, SliderRepo};
pub use testing::ClockPort;

#[cfg(test)]
pub use repos::{MockContentRepo, MockFeedbackRepo, MockRegionRepo, MockSliderRepo};
#[cfg(test)]
pub use testing::MockClockPort;
