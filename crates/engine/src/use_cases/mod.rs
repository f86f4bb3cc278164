//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod management;
pub mod region;
pub mod validation;

pub use management::ManagementUseCases;
pub use region::RegionUseCases;
