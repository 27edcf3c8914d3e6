//! Feed Sources
//!
//! Supply the ordered post list at screen entry. Both sources are static;
//! a network-backed source would implement the same trait.

use crate::domain::Post;
use serde::{Deserialize, Serialize};

const SAMPLE_AVATAR_URL: &str = "https://goo.gl/v5j9Vf";
const SAMPLE_MEDIA_URL: &str = "https://blogassets.airtel.in/wp-content/uploads/2024/10/alexander-shatov-71Qk8ODIBko-unsplash.jpg";

/// Provides the feed's posts in render order
pub trait FeedSource {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Posts in render order
    fn posts(&self) -> Vec<Post>;
}

/// Selects which built-in source the app starts with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    #[default]
    Sample,
    Preview,
}

impl FeedKind {
    pub fn source(self) -> Box<dyn FeedSource> {
        match self {
            FeedKind::Sample => Box::new(SampleFeed),
            FeedKind::Preview => Box::new(PreviewFeed),
        }
    }
}

/// The two-post demo feed
pub struct SampleFeed;

impl FeedSource for SampleFeed {
    fn name(&self) -> &'static str {
        "sample"
    }

    fn posts(&self) -> Vec<Post> {
        vec![
            Post::new(
                1,
                "fajar_farizi",
                SAMPLE_AVATAR_URL,
                SAMPLE_MEDIA_URL,
                "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nam nec vulputate nisl.",
            )
            .with_counters(120, 15, 90),
            Post::new(
                2,
                "android_dev",
                SAMPLE_AVATAR_URL,
                SAMPLE_MEDIA_URL,
                "UI Instagram Clone",
            )
            .with_counters(99, 19, 20),
        ]
    }
}

/// Design-preview feed; avatars are intentionally blank
pub struct PreviewFeed;

impl FeedSource for PreviewFeed {
    fn name(&self) -> &'static str {
        "preview"
    }

    fn posts(&self) -> Vec<Post> {
        vec![
            Post::new(1, "fajar_farizi", "", SAMPLE_MEDIA_URL, "Lorem ipsum dolor sit amet.")
                .with_counters(120, 15, 90),
            Post::new(2, "user2", "", SAMPLE_MEDIA_URL, "testtttttttt").with_counters(99, 19, 20),
        ]
    }
}
