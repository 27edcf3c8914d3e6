//! Services - Collaborators Outside the UI Thread
//!
//! Feed sources, image loading, and the tokio bridge they run on.

mod feed_source;
mod image_loader;
mod runtime;

pub use feed_source::*;
pub use image_loader::*;
pub use runtime::*;
