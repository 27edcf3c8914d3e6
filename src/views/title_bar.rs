//! Title Bar Component
//!
//! App title on the left, two inert icon buttons on the right.

use crate::assets::CustomIconName;
use crate::state::i18n_title;
use crate::theme::FeedStyle;
use gpui::{Context, FontWeight, Window, prelude::*, px};
use gpui_component::{
    Sizable, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
};

/// Title bar component
pub struct SnapTitleBar {
    style: FeedStyle,
}

impl SnapTitleBar {
    /// Create a new title bar
    pub fn new(style: FeedStyle, _window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self { style }
    }
}

impl Render for SnapTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.style.colors;

        // Right side actions; neither button has a click handler
        let right_actions = h_flex()
            .items_center()
            .justify_end()
            .px_2()
            .gap_2()
            .mr_2();

        TitleBar::new()
            .bg(colors.title_bar_bg)
            .border_color(colors.border)
            .child(
                h_flex().flex_1().items_center().pl_4().child(
                    Label::new(i18n_title(cx, "app"))
                        .text_size(px(self.style.metrics.title_size))
                        .font_weight(FontWeight::BOLD)
                        .text_color(colors.text_primary),
                ),
            )
            .child(
                right_actions
                    .child(
                        Button::new("likes")
                            .tooltip(i18n_title(cx, "likes"))
                            .icon(CustomIconName::Heart)
                            .small()
                            .ghost(),
                    )
                    .child(
                        Button::new("direct-message")
                            .tooltip(i18n_title(cx, "direct_message"))
                            .icon(CustomIconName::Send)
                            .small()
                            .ghost(),
                    ),
            )
    }
}
