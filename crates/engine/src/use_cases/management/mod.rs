//! Management use cases for CRUD-style operations on sliders, content cards
//! and feedback.

mod content;
mod feedback;
mod slider;

pub use content::{ContentCrud, CreateContentInput, UpdateContentInput};
pub use feedback::{CreateFeedbackInput, FeedbackCrud};
pub use slider::{CreateSliderInput, SliderCrud, UpdateSliderInput};

use geoward_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("{entity_type} not found")]
    NotFound { entity_type: &'static str, id: String },
    #[error("{0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repo(RepoError),
}

impl From<RepoError> for ManagementError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Repo(other),
        }
    }
}

impl From<DomainError> for ManagementError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => Self::Validation(msg),
        }
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub slider: SliderCrud,
    pub content: ContentCrud,
    pub feedback: FeedbackCrud,
}

impl ManagementUseCases {
    pub fn new(slider: SliderCrud, content: ContentCrud, feedback: FeedbackCrud) -> Self {
        Self {
            slider,
            content,
            feedback,
        }
    }
}
