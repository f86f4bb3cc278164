//! Domain entities - Core business objects with identity

mod content;
mod feedback;
mod region;
mod slider;

pub use content::{sort_for_display as sort_contents_for_display, Content, MAX_CONTENT_WORDS};
pub use feedback::Feedback;
pub use region::Region;
pub use slider::{sort_for_display as sort_sliders_for_display, Slider};
