//! Post Card - One Feed Entry
//!
//! Layout, top to bottom: header (avatar, username, overflow icon), the
//! full-width media, the action row with counters, then the caption line.

use super::icon_action::IconAction;
use super::remote_image::{ImageShape, RemoteImage};
use crate::assets::CustomIconName;
use crate::domain::Post;
use crate::state::RowImages;
use crate::theme::FeedStyle;
use gpui::{
    App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{h_flex, v_flex};

const OVERFLOW_ICON_SIZE: f32 = 24.0;

/// Icons shown in a post's action row, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Favorite,
    Comment,
    Repost,
    Send,
}

impl ActionKind {
    pub const ROW: [ActionKind; 4] = [
        ActionKind::Favorite,
        ActionKind::Comment,
        ActionKind::Repost,
        ActionKind::Send,
    ];

    pub fn icon(self) -> CustomIconName {
        match self {
            ActionKind::Favorite => CustomIconName::Heart,
            ActionKind::Comment => CustomIconName::Message,
            ActionKind::Repost => CustomIconName::Repeat,
            ActionKind::Send => CustomIconName::Send,
        }
    }

    /// Counter shown next to the icon; send has none
    pub fn count(self, post: &Post) -> Option<u32> {
        match self {
            ActionKind::Favorite => Some(post.likes),
            ActionKind::Comment => Some(post.comments),
            ActionKind::Repost => Some(post.reposts),
            ActionKind::Send => None,
        }
    }
}

/// Action icons paired with their counter text.
///
/// Counters are the plain decimal value, never abbreviated.
pub fn action_row(post: &Post) -> Vec<(ActionKind, Option<SharedString>)> {
    ActionKind::ROW
        .into_iter()
        .map(|kind| (kind, kind.count(post).map(|n| n.to_string().into())))
        .collect()
}

/// Renders one post from its data and current image state
#[derive(IntoElement)]
pub struct PostCard {
    post: Post,
    images: RowImages,
    style: FeedStyle,
    fallback_label: Option<SharedString>,
}

impl PostCard {
    pub fn new(post: Post, images: RowImages, style: FeedStyle) -> Self {
        Self {
            post,
            images,
            style,
            fallback_label: None,
        }
    }

    pub fn fallback_label(mut self, label: impl Into<SharedString>) -> Self {
        self.fallback_label = Some(label.into());
        self
    }

    fn render_header(&self) -> impl IntoElement {
        let m = self.style.metrics;

        h_flex()
            .w_full()
            .items_center()
            .p(px(m.row_padding))
            .child(RemoteImage::new(
                self.images.avatar.clone(),
                ImageShape::Circle(m.post_avatar),
                self.style,
            ))
            .child(
                div()
                    .flex_1()
                    .pl(px(m.row_padding))
                    .font_weight(FontWeight::BOLD)
                    .text_color(self.style.colors.text_primary)
                    .child(self.post.username.clone()),
            )
            .child(IconAction::new(
                CustomIconName::MoreVertical,
                OVERFLOW_ICON_SIZE,
                self.style,
            ))
    }

    fn render_actions(&self) -> impl IntoElement {
        let style = self.style;
        let m = style.metrics;

        h_flex().items_center().p(px(m.row_padding)).children(
            action_row(&self.post)
                .into_iter()
                .enumerate()
                .map(move |(ix, (kind, counter))| {
                    h_flex()
                        .items_center()
                        .when(ix > 0, |this| this.ml(px(m.action_gap)))
                        .child(IconAction::new(kind.icon(), m.action_icon, style))
                        .when_some(counter, |this, counter| {
                            this.child(
                                div()
                                    .ml(px(m.counter_gap))
                                    .font_weight(FontWeight::BOLD)
                                    .text_color(style.colors.text_primary)
                                    .child(counter),
                            )
                        })
                }),
        )
    }

    fn render_caption(&self) -> impl IntoElement {
        let m = self.style.metrics;
        let colors = self.style.colors;

        h_flex()
            .w_full()
            .items_start()
            .px(px(m.row_padding))
            .text_color(colors.text_primary)
            .child(
                div()
                    .flex_none()
                    .font_weight(FontWeight::BOLD)
                    .child(self.post.username.clone()),
            )
            .child(
                div()
                    .flex_1()
                    .min_w_0()
                    .ml(px(m.counter_gap))
                    .child(self.post.caption.clone()),
            )
    }
}

impl RenderOnce for PostCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let m = self.style.metrics;

        v_flex()
            .w_full()
            .pb(px(m.card_spacing))
            .child(self.render_header())
            .child(
                RemoteImage::new(
                    self.images.media.clone(),
                    ImageShape::Banner(m.media_height),
                    self.style,
                )
                .fallback_label(self.fallback_label.clone()),
            )
            .child(self.render_actions())
            .child(self.render_caption())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FeedSource, SampleFeed};

    fn counters(post: &Post) -> Vec<Option<String>> {
        action_row(post)
            .into_iter()
            .map(|(_, counter)| counter.map(|c| c.to_string()))
            .collect()
    }

    #[test]
    fn test_counters_are_literal_decimals() {
        let post = Post::new(7, "big", "", "", "").with_counters(1_234_567, 1000, 0);
        assert_eq!(
            counters(&post),
            vec![
                Some("1234567".to_string()),
                Some("1000".to_string()),
                Some("0".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_action_row_order_and_icons() {
        let post = Post::new(1, "a", "", "", "");
        let kinds: Vec<_> = action_row(&post).into_iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, ActionKind::ROW.to_vec());
        assert_eq!(ActionKind::Repost.icon(), CustomIconName::Repeat);
        assert_eq!(ActionKind::Send.count(&post), None);
    }

    #[test]
    fn test_action_row_is_idempotent() {
        let post = Post::new(3, "c", "", "", "").with_counters(5, 6, 7);
        assert_eq!(action_row(&post), action_row(&post));
    }

    #[test]
    fn test_sample_feed_counters() {
        let posts = SampleFeed.posts();
        assert_eq!(
            counters(&posts[0]),
            vec![
                Some("120".to_string()),
                Some("15".to_string()),
                Some("90".to_string()),
                None,
            ]
        );
        assert_eq!(
            counters(&posts[1]),
            vec![
                Some("99".to_string()),
                Some("19".to_string()),
                Some("20".to_string()),
                None,
            ]
        );
    }
}
