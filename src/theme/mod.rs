//! Theme - Palette and Sizes

pub mod colors;
pub mod style;

pub use colors::FeedColors;
pub use style::{FeedMetrics, FeedStyle, STORY_RING_WIDTH};
