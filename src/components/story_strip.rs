//! Story Strip - Horizontal Row of Story Avatars
//!
//! Every item is a circular image inside a colored ring with a small
//! label underneath. The strip scrolls horizontally on its own.

use super::remote_image::{ImageShape, RemoteImage};
use crate::state::StoryItem;
use crate::theme::FeedStyle;
use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px};
use gpui_component::{h_flex, v_flex};

#[derive(IntoElement)]
pub struct StoryStrip {
    stories: Vec<StoryItem>,
    style: FeedStyle,
}

impl StoryStrip {
    pub fn new(stories: Vec<StoryItem>, style: FeedStyle) -> Self {
        Self { stories, style }
    }
}

fn story_avatar(story: StoryItem, style: FeedStyle) -> impl IntoElement {
    let m = style.metrics;
    let colors = style.colors;

    v_flex()
        .flex_none()
        .items_center()
        .px(px(m.story_spacing))
        .child(
            div()
                .flex_none()
                .size(px(m.story_avatar))
                .rounded_full()
                .border_2()
                .border_color(colors.story_ring)
                .flex()
                .items_center()
                .justify_center()
                .child(RemoteImage::new(
                    story.image,
                    ImageShape::Circle(style.story_image_size()),
                    style,
                )),
        )
        .child(
            div()
                .text_size(px(m.story_label_size))
                .text_color(colors.text_secondary)
                .child(story.label),
        )
}

impl RenderOnce for StoryStrip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let style = self.style;

        div()
            .id("story-strip")
            .w_full()
            .overflow_x_scroll()
            .py(px(style.metrics.story_spacing))
            .child(
                h_flex().children(
                    self.stories
                        .into_iter()
                        .map(move |story| story_avatar(story, style)),
                ),
            )
    }
}
