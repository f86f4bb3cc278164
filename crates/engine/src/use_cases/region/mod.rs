//! Geofence region use cases.

mod containment;
mod crud;

pub use containment::{CheckPoint, CheckPointInput, ContainmentResult};
pub use crud::{CreateRegionInput, RegionCrud, UpdateRegionInput};

use std::sync::Arc;

use geoward_domain::DomainError;

use crate::infrastructure::ports::RepoError;
use crate::use_cases::validation::ValidationError;

/// Errors from region use cases.
#[derive(Debug, thiserror::Error)]
pub enum RegionError {
    #[error("{0}")]
    Validation(String),
    #[error("Region not found: {0}")]
    NotFound(String),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl From<RepoError> for RegionError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { id, .. } => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<DomainError> for RegionError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => Self::Validation(msg),
        }
    }
}

impl From<ValidationError> for RegionError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Container for region use cases.
pub struct RegionUseCases {
    pub crud: Arc<RegionCrud>,
    pub check_point: Arc<CheckPoint>,
}

impl RegionUseCases {
    pub fn new(crud: Arc<RegionCrud>, check_point: Arc<CheckPoint>) -> Self {
        Self { crud, check_point }
    }
}
