//! Icon Action - Inert Icon Button
//!
//! Shows hover feedback but carries no click handler; the feed's action
//! icons are decorative.

use crate::assets::CustomIconName;
use crate::theme::FeedStyle;
use gpui::{App, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px};
use gpui_component::Icon;

#[derive(IntoElement)]
pub struct IconAction {
    icon: CustomIconName,
    size: f32,
    style: FeedStyle,
}

impl IconAction {
    pub fn new(icon: CustomIconName, size: f32, style: FeedStyle) -> Self {
        Self { icon, size, style }
    }
}

impl RenderOnce for IconAction {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.style.colors;

        div()
            .flex_none()
            .p_0p5()
            .rounded_md()
            .hover(move |style| style.bg(colors.icon_hover))
            .child(
                Icon::from(self.icon)
                    .size(px(self.size))
                    .text_color(colors.icon),
            )
    }
}
