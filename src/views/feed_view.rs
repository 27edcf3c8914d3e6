//! Feed View
//!
//! The scrollable feed: a virtualized `list` whose item 0 is the story
//! strip and whose remaining items are post cards.
//!
//! ```text
//! render_item(ix) ──► RenderedRange ──(deferred)──► on_visible_range
//!                                                        │
//!                                    FeedState::set_visible_items
//!                                                        │
//!                      evicted rows ◄────────────────────┴──► load tickets
//!                   (abort their fetches)                        │
//!                                                                ▼
//!                                        spawn_in_tokio(loader.load(url))
//!                                                      │
//!                                                      ▼
//!                                  FeedState::apply_row_load (stale-safe)
//! ```

use crate::components::{PostCard, StoryStrip};
use crate::constants::{INITIAL_VISIBLE_ITEMS, LIST_OVERDRAW};
use crate::domain::{FeedItem, PostId};
use crate::services::{ImageLoader, run_in_tokio, spawn_in_tokio};
use crate::state::{FeedState, ImageRole, LoadTicket, RenderedRange, StoryTicket, i18n_feed};
use crate::theme::FeedStyle;
use ahash::AHashMap;
use gpui::{
    AnyElement, Context, Entity, IntoElement, ListAlignment, ListState,
    ParentElement, Render, Styled, Task, Window, div, list, px,
};
use std::ops::Range;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tracing::debug;

type RowKey = (PostId, ImageRole);

/// A running row image load
struct RowLoad {
    generation: u64,
    fetch: AbortHandle,
    task: Task<()>,
}

/// Virtualized feed of stories and posts
pub struct FeedView {
    state: Entity<FeedState>,
    list_state: ListState,
    loader: Arc<dyn ImageLoader>,
    style: FeedStyle,
    in_flight: AHashMap<RowKey, RowLoad>,
    story_tasks: Vec<Task<()>>,
    rendered: RenderedRange,
}

impl FeedView {
    pub fn new(
        state: Entity<FeedState>,
        loader: Arc<dyn ImageLoader>,
        style: FeedStyle,
        cx: &mut Context<Self>,
    ) -> Self {
        let item_count = state.read(cx).item_count();
        let list_state = ListState::new(item_count, ListAlignment::Top, px(LIST_OVERDRAW));

        cx.observe(&state, |_, _, cx| cx.notify()).detach();

        let mut this = Self {
            state,
            list_state,
            loader,
            style,
            in_flight: AHashMap::default(),
            story_tasks: Vec::new(),
            rendered: RenderedRange::default(),
        };
        this.load_stories(cx);
        this.on_visible_range(0..INITIAL_VISIBLE_ITEMS.min(item_count), cx);
        this
    }

    fn load_stories(&mut self, cx: &mut Context<Self>) {
        let tickets = self.state.read(cx).request_stories();
        self.story_tasks = tickets
            .into_iter()
            .map(|ticket| self.spawn_story_load(ticket, cx))
            .collect();
    }

    fn spawn_story_load(&self, ticket: StoryTicket, cx: &mut Context<Self>) -> Task<()> {
        let pending = self.loader.load(&ticket.url);
        let state = self.state.clone();
        cx.spawn(async move |_, cx| {
            let loaded = run_in_tokio(pending).await;
            let _ = state.update(cx, |state, cx| {
                if state.apply_story_load(&ticket, loaded) {
                    cx.notify();
                }
            });
        })
    }

    /// Materialize rows around the visible list items and start their loads
    fn on_visible_range(&mut self, items: Range<usize>, cx: &mut Context<Self>) {
        if self.state.read(cx).visible_items() == items {
            return;
        }

        let materialized = self
            .state
            .update(cx, |state, _| state.set_visible_items(items));

        if !materialized.evicted.is_empty() {
            debug!(evicted = materialized.evicted.len(), "Recycling feed rows");
        }
        for post in materialized.evicted {
            self.in_flight.retain(|(id, _), load| {
                if *id == post {
                    load.fetch.abort();
                }
                *id != post
            });
        }

        for ticket in materialized.tickets {
            let key = (ticket.post, ticket.role);
            let load = self.spawn_row_load(ticket, cx);
            if let Some(previous) = self.in_flight.insert(key, load) {
                previous.fetch.abort();
            }
        }

        cx.notify();
    }

    fn spawn_row_load(&self, ticket: LoadTicket, cx: &mut Context<Self>) -> RowLoad {
        let generation = ticket.generation;
        let handle = spawn_in_tokio(self.loader.load(&ticket.url));
        let fetch = handle.abort_handle();
        let state = self.state.clone();

        let task = cx.spawn(async move |this, cx| {
            let loaded = match handle.await {
                Ok(loaded) => loaded,
                Err(e) if e.is_cancelled() => return,
                Err(e) => std::panic::resume_unwind(e.into_panic()),
            };
            let key = (ticket.post, ticket.role);
            let _ = this.update(cx, |view, cx| {
                if view
                    .in_flight
                    .get(&key)
                    .is_some_and(|load| load.generation == ticket.generation)
                {
                    // Detach so removing the entry does not cancel this task
                    if let Some(load) = view.in_flight.remove(&key) {
                        load.task.detach();
                    }
                }
                state.update(cx, |state, cx| {
                    if state.apply_row_load(&ticket, loaded) {
                        cx.notify();
                    }
                });
            });
        });

        RowLoad {
            generation,
            fetch,
            task,
        }
    }

    /// Sync the live rows with what the list rendered in the last frame
    fn sync_rendered_items(&mut self, cx: &mut Context<Self>) {
        if let Some(items) = self.rendered.take() {
            self.on_visible_range(items, cx);
        }
    }

    fn render_item(&mut self, ix: usize, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        if self.rendered.record(ix) {
            cx.defer_in(window, |this, _window, cx| this.sync_rendered_items(cx));
        }

        let style = self.style;
        let state = self.state.read(cx);

        match state.feed().item(ix) {
            Some(FeedItem::Stories) => {
                StoryStrip::new(state.stories().to_vec(), style).into_any_element()
            }
            Some(FeedItem::Post(post)) => {
                let images = state.row_images(post);
                let post = post.clone();
                let fallback = i18n_feed(cx, "image_unavailable");
                PostCard::new(post, images, style)
                    .fallback_label(fallback)
                    .into_any_element()
            }
            None => div().into_any_element(),
        }
    }
}

impl Render for FeedView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let item_count = self.state.read(cx).item_count();
        if self.list_state.item_count() != item_count {
            self.list_state.reset(item_count);
        }

        div()
            .size_full()
            .bg(self.style.colors.background)
            .child(
                list(
                    self.list_state.clone(),
                    cx.processor(|this, ix, window, cx| this.render_item(ix, window, cx)),
                )
                .size_full(),
            )
    }
}
