//! In-memory repositories.
//!
//! Each repository keeps its state behind a single `tokio::sync::Mutex` held
//! for the whole operation, so multi-step mutations are atomic with respect
//! to each other. Used for development (`STORAGE_BACKEND=memory`) and tests.

use std::sync::Arc;

mod content_repo;
mod feedback_repo;
mod region_repo;
mod slider_repo;

pub use content_repo::MemoryContentRepo;
pub use feedback_repo::MemoryFeedbackRepo;
pub use region_repo::MemoryRegionRepo;
pub use slider_repo::MemorySliderRepo;

/// Create all in-memory repositories.
pub struct MemoryRepositories {
    pub region: Arc<MemoryRegionRepo>,
    pub slider: Arc<MemorySliderRepo>,
    pub content: Arc<MemoryContentRepo>,
    pub feedback: Arc<MemoryFeedbackRepo>,
}

impl MemoryRepositories {
    pub fn new() -> Self {
        Self {
            region: Arc::new(MemoryRegionRepo::new()),
            slider: Arc::new(MemorySliderRepo::new()),
            content: Arc::new(MemoryContentRepo::new()),
            feedback: Arc::new(MemoryFeedbackRepo::new()),
        }
    }
}

impl Default for MemoryRepositories {
    fn default() -> Self {
        Self::new()
    }
}
