//! Post - Immutable Feed Entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a post within one feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u32);

impl PostId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One feed entry: author, media, caption and display-only counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Unique within the feed
    pub id: PostId,
    /// Author display name
    pub username: String,
    /// Author avatar URL (may be empty)
    pub user_image_url: String,
    /// Media URL (may be empty)
    pub post_image_url: String,
    /// Free-form caption
    pub caption: String,
    pub likes: u32,
    pub comments: u32,
    pub reposts: u32,
}

impl Post {
    /// Create a post with zeroed counters
    pub fn new(
        id: u32,
        username: impl Into<String>,
        user_image_url: impl Into<String>,
        post_image_url: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            id: PostId(id),
            username: username.into(),
            user_image_url: user_image_url.into(),
            post_image_url: post_image_url.into(),
            caption: caption.into(),
            likes: 0,
            comments: 0,
            reposts: 0,
        }
    }

    /// Set the like, comment and repost counters
    pub fn with_counters(mut self, likes: u32, comments: u32, reposts: u32) -> Self {
        self.likes = likes;
        self.comments = comments;
        self.reposts = reposts;
        self
    }
}
