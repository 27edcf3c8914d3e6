//! App Shell - Title Bar Above the Feed

use gpui::{Context, Entity, IntoElement, ParentElement, Render, Styled, Window, div, prelude::*};
use std::sync::Arc;

use crate::domain::Feed;
use crate::services::ImageLoader;
use crate::state::{FeedSettings, FeedState};
use crate::theme::FeedStyle;
use crate::views::{FeedView, SnapTitleBar};

/// Root view of the main window
pub struct AppShell {
    title_bar: Entity<SnapTitleBar>,
    feed_view: Entity<FeedView>,
    style: FeedStyle,
}

impl AppShell {
    pub fn new(
        feed: Feed,
        settings: &FeedSettings,
        loader: Arc<dyn ImageLoader>,
        style: FeedStyle,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let title_bar = cx.new(|cx| SnapTitleBar::new(style, window, cx));
        let state = cx.new(|_| FeedState::new(feed, settings));
        let feed_view = cx.new(|cx| FeedView::new(state, loader, style, cx));

        Self {
            title_bar,
            feed_view,
            style,
        }
    }
}

impl Render for AppShell {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(self.style.colors.background)
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.feed_view.clone()),
            )
    }
}
