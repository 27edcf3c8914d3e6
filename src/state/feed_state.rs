//! Feed State
//!
//! Holds the post snapshot, the story strip's image state and the live
//! row pool. Methods are plain data operations; the owning view calls
//! `cx.notify()` when they report a change.

use super::row_pool::{LoadTicket, Materialized, RowImages, RowPool, live_window};
use crate::domain::{Feed, Post};
use crate::services::LoadState;
use crate::state::FeedSettings;
use gpui::SharedString;
use std::ops::Range;
use tracing::debug;

/// One avatar of the story strip
#[derive(Debug, Clone)]
pub struct StoryItem {
    pub label: SharedString,
    pub image: LoadState,
}

/// A load request for one story avatar
#[derive(Debug, Clone)]
pub struct StoryTicket {
    pub index: usize,
    pub url: SharedString,
}

/// Story labels are `User {index}`, 0-based
pub fn story_label(index: usize) -> SharedString {
    format!("User {index}").into()
}

/// List items the list asked to render since the last sync
///
/// The list only builds elements for items in or near the viewport, so the
/// span of rendered indices tracks the viewport through resizes and
/// scrolls alike.
#[derive(Debug, Default)]
pub struct RenderedRange {
    range: Option<Range<usize>>,
}

impl RenderedRange {
    /// Record one rendered item; returns `true` for the first item of a batch
    pub fn record(&mut self, ix: usize) -> bool {
        match &mut self.range {
            Some(range) => {
                range.start = range.start.min(ix);
                range.end = range.end.max(ix + 1);
                false
            }
            None => {
                self.range = Some(ix..ix + 1);
                true
            }
        }
    }

    /// Finish the batch
    pub fn take(&mut self) -> Option<Range<usize>> {
        self.range.take()
    }
}

/// State behind the feed screen
pub struct FeedState {
    feed: Feed,
    stories: Vec<StoryItem>,
    story_image_url: SharedString,
    rows: RowPool,
    overscan: usize,
    visible_items: Range<usize>,
}

impl FeedState {
    pub fn new(feed: Feed, settings: &FeedSettings) -> Self {
        let story_image_url: SharedString = settings.story_image_url.clone().into();
        let stories = (0..settings.story_count)
            .map(|index| StoryItem {
                label: story_label(index),
                image: LoadState::for_url(&story_image_url),
            })
            .collect();

        Self {
            feed,
            stories,
            story_image_url,
            rows: RowPool::new(settings.max_live_rows),
            overscan: settings.overscan_rows,
            visible_items: 0..0,
        }
    }

    // ==================== Getters ====================

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// List items: the story strip plus one per post
    pub fn item_count(&self) -> usize {
        self.feed.item_count()
    }

    pub fn stories(&self) -> &[StoryItem] {
        &self.stories
    }

    pub fn rows(&self) -> &RowPool {
        &self.rows
    }

    /// Last visible item range reported by the list
    pub fn visible_items(&self) -> Range<usize> {
        self.visible_items.clone()
    }

    /// Image state for a post card; rows outside the pool show placeholders
    pub fn row_images(&self, post: &Post) -> RowImages {
        self.rows
            .images(post.id)
            .cloned()
            .unwrap_or_else(|| RowImages::pending(post))
    }

    // ==================== Stories ====================

    /// Tickets for every story avatar that still needs its image
    pub fn request_stories(&self) -> Vec<StoryTicket> {
        if self.story_image_url.trim().is_empty() {
            return Vec::new();
        }
        self.stories
            .iter()
            .enumerate()
            .filter(|(_, story)| story.image.is_loading())
            .map(|(index, _)| StoryTicket {
                index,
                url: self.story_image_url.clone(),
            })
            .collect()
    }

    pub fn apply_story_load(&mut self, ticket: &StoryTicket, state: LoadState) -> bool {
        match self.stories.get_mut(ticket.index) {
            Some(story) => {
                story.image = state;
                true
            }
            None => false,
        }
    }

    // ==================== Rows ====================

    /// Update the visible list range (list indices, story strip at 0)
    pub fn set_visible_items(&mut self, items: Range<usize>) -> Materialized {
        self.visible_items = items.clone();

        let posts = items.start.saturating_sub(1)..items.end.saturating_sub(1);
        let window = live_window(posts, self.overscan, self.feed.len(), self.rows.capacity());
        debug!(?items, ?window, "Feed viewport changed");

        self.rows.materialize(self.feed.posts(), window)
    }

    pub fn apply_row_load(&mut self, ticket: &LoadTicket, state: LoadState) -> bool {
        self.rows.apply(ticket, state)
    }
}
