//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the feed itself.

pub mod feed;
pub mod post;

pub use feed::*;
pub use post::*;
