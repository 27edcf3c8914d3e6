//! Components - Stateless Feed Elements
//!
//! Everything here is `RenderOnce`: data and a [`crate::theme::FeedStyle`]
//! go in, an element comes out.

pub mod icon_action;
pub mod post_card;
pub mod remote_image;
pub mod story_strip;

pub use icon_action::IconAction;
pub use post_card::{ActionKind, PostCard, action_row};
pub use remote_image::{ImageFace, ImageShape, RemoteImage};
pub use story_strip::StoryStrip;
