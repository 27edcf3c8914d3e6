//! Feed - Ordered Post Snapshot
//!
//! The feed is fixed for the lifetime of the screen. List order is render
//! order: nothing is sorted or deduplicated.

use super::post::Post;
use crate::error::{Error, Result};
use ahash::AHashSet;
use std::sync::Arc;

/// One entry of the scrollable feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedItem<'a> {
    /// The leading story strip
    Stories,
    /// A post card
    Post(&'a Post),
}

/// Immutable, shareable list of posts
#[derive(Debug, Clone)]
pub struct Feed {
    posts: Arc<[Post]>,
}

impl Feed {
    /// Build a feed, rejecting duplicate post ids
    pub fn new(posts: Vec<Post>) -> Result<Self> {
        let mut seen = AHashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.id) {
                return Err(Error::DuplicatePostId { id: post.id.get() });
            }
        }
        Ok(Self {
            posts: posts.into(),
        })
    }

    /// A feed with no posts (renders the story strip only)
    pub fn empty() -> Self {
        Self {
            posts: Arc::from(Vec::new()),
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Number of list items: the story strip plus one per post
    pub fn item_count(&self) -> usize {
        self.posts.len() + 1
    }

    /// Resolve a list index; index 0 is the story strip
    pub fn item(&self, index: usize) -> Option<FeedItem<'_>> {
        match index {
            0 => Some(FeedItem::Stories),
            i => self.posts.get(i - 1).map(FeedItem::Post),
        }
    }

    /// All items in render order
    pub fn items(&self) -> impl Iterator<Item = FeedItem<'_>> {
        std::iter::once(FeedItem::Stories).chain(self.posts.iter().map(FeedItem::Post))
    }
}

impl Default for Feed {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, name: &str) -> Post {
        Post::new(id, name, "", "", "")
    }

    #[test]
    fn test_items_stories_first_then_list_order() {
        let feed = Feed::new(vec![post(7, "b"), post(3, "a"), post(5, "c")]).expect("valid feed");
        let ids: Vec<Option<u32>> = feed
            .items()
            .map(|item| match item {
                FeedItem::Stories => None,
                FeedItem::Post(p) => Some(p.id.get()),
            })
            .collect();
        assert_eq!(ids, vec![None, Some(7), Some(3), Some(5)]);
        assert_eq!(feed.item_count(), 4);
    }

    #[test]
    fn test_empty_feed_has_only_stories() {
        let feed = Feed::empty();
        assert_eq!(feed.item_count(), 1);
        assert_eq!(feed.item(0), Some(FeedItem::Stories));
        assert_eq!(feed.item(1), None);
        assert_eq!(feed.items().count(), 1);
    }

    #[test]
    fn test_item_index_maps_to_post() {
        let feed = Feed::new(vec![post(1, "x"), post(2, "y")]).expect("valid feed");
        assert!(matches!(feed.item(1), Some(FeedItem::Post(p)) if p.username == "x"));
        assert!(matches!(feed.item(2), Some(FeedItem::Post(p)) if p.username == "y"));
        assert_eq!(feed.item(3), None);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Feed::new(vec![post(1, "x"), post(1, "y")]);
        assert!(matches!(result, Err(Error::DuplicatePostId { id: 1 })));
    }

    #[test]
    fn test_same_content_different_ids_kept() {
        let feed = Feed::new(vec![post(1, "same"), post(2, "same")]).expect("valid feed");
        assert_eq!(feed.len(), 2);
    }
}
