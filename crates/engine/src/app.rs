//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    memory::MemoryRepositories,
    neo4j::Neo4jRepositories,
    ports::{ClockPort, ContentRepo, FeedbackRepo, RegionRepo, SliderRepo},
};
use crate::use_cases::{
    self,
    management::{ContentCrud, FeedbackCrud, SliderCrud},
    region::{CheckPoint, RegionCrud},
};

/// Main application state.
///
/// Holds all repositories and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for all repository ports.
#[derive(Clone)]
pub struct Repositories {
    pub region: Arc<dyn RegionRepo>,
    pub slider: Arc<dyn SliderRepo>,
    pub content: Arc<dyn ContentRepo>,
    pub feedback: Arc<dyn FeedbackRepo>,
}

impl From<Neo4jRepositories> for Repositories {
    fn from(repos: Neo4jRepositories) -> Self {
        Self {
            region: repos.region,
            slider: repos.slider,
            content: repos.content,
            feedback: repos.feedback,
        }
    }
}

impl From<MemoryRepositories> for Repositories {
    fn from(repos: MemoryRepositories) -> Self {
        Self {
            region: repos.region,
            slider: repos.slider,
            content: repos.content,
            feedback: repos.feedback,
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub regions: use_cases::RegionUseCases,
    pub management: use_cases::ManagementUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repositories: Repositories, clock: Arc<dyn ClockPort>) -> Self {
        let regions = use_cases::RegionUseCases::new(
            Arc::new(RegionCrud::new(repositories.region.clone(), clock.clone())),
            Arc::new(CheckPoint::new(repositories.region.clone())),
        );
        let management = use_cases::ManagementUseCases::new(
            SliderCrud::new(repositories.slider.clone(), clock.clone()),
            ContentCrud::new(repositories.content.clone(), clock.clone()),
            FeedbackCrud::new(repositories.feedback.clone(), clock),
        );

        Self {
            repositories,
            use_cases: UseCases {
                regions,
                management,
            },
        }
    }

    /// App backed by in-memory repositories.
    pub fn in_memory(clock: Arc<dyn ClockPort>) -> Self {
        Self::new(MemoryRepositories::new().into(), clock)
    }
}
