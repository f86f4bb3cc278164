//! Neo4j database implementations.

use neo4rs::Graph;
use std::sync::Arc;

mod helpers;

mod content_repo;
mod feedback_repo;
mod region_repo;
mod schema;
mod slider_repo;

#[cfg(test)]
pub(crate) mod test_harness;

#[cfg(test)]
mod integration_tests;

pub use content_repo::Neo4jContentRepo;
pub use feedback_repo::Neo4jFeedbackRepo;
pub use region_repo::Neo4jRegionRepo;
pub use schema::ensure_schema;
pub use slider_repo::Neo4jSliderRepo;

/// Create all Neo4j repositories from a graph connection.
pub struct Neo4jRepositories {
    pub region: Arc<Neo4jRegionRepo>,
    pub slider: Arc<Neo4jSliderRepo>,
    pub content: Arc<Neo4jContentRepo>,
    pub feedback: Arc<Neo4jFeedbackRepo>,
}

impl Neo4jRepositories {
    pub fn new(graph: Graph) -> Self {
        Self {
            region: Arc::new(Neo4jRegionRepo::new(graph.clone())),
            slider: Arc::new(Neo4jSliderRepo::new(graph.clone())),
            content: Arc::new(Neo4jContentRepo::new(graph.clone())),
            feedback: Arc::new(Neo4jFeedbackRepo::new(graph)),
        }
    }
}
