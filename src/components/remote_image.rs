//! Remote Image Component
//!
//! Renders one image slot from its [`LoadState`]. A slot always renders
//! something: a placeholder while loading or without a URL, the image once
//! loaded, and a fallback after a failed fetch or a failed decode.

use crate::services::LoadState;
use crate::theme::{FeedColors, FeedStyle};
use gpui::{
    App, Div, Image, IntoElement, ObjectFit, ParentElement, RenderOnce, SharedString, Styled,
    StyledImage, Window, div, img, prelude::*, px,
};
use std::sync::Arc;

/// Geometry of an image slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageShape {
    /// Circle with the given diameter
    Circle(f32),
    /// Full-width region with the given height
    Banner(f32),
}

/// What a slot shows for a given load state
#[derive(Debug, Clone)]
pub enum ImageFace {
    Placeholder,
    Image(Arc<Image>),
    Fallback,
}

impl ImageFace {
    pub fn for_state(state: &LoadState) -> Self {
        match state {
            LoadState::Empty | LoadState::Loading => ImageFace::Placeholder,
            LoadState::Loaded(image) => ImageFace::Image(image.clone()),
            LoadState::Failed(_) => ImageFace::Fallback,
        }
    }
}

fn shaped<E: Styled>(element: E, shape: ImageShape) -> E {
    match shape {
        ImageShape::Circle(diameter) => element.flex_none().size(px(diameter)).rounded_full(),
        ImageShape::Banner(height) => element.w_full().h(px(height)),
    }
}

fn fallback_box(shape: ImageShape, colors: FeedColors, label: Option<SharedString>) -> Div {
    shaped(
        div()
            .bg(colors.fallback)
            .flex()
            .items_center()
            .justify_center()
            .when_some(label, |this, label| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(colors.fallback_text)
                        .child(label),
                )
            }),
        shape,
    )
}

/// An image slot backed by a [`LoadState`]
#[derive(IntoElement)]
pub struct RemoteImage {
    state: LoadState,
    shape: ImageShape,
    style: FeedStyle,
    fallback_label: Option<SharedString>,
}

impl RemoteImage {
    pub fn new(state: LoadState, shape: ImageShape, style: FeedStyle) -> Self {
        Self {
            state,
            shape,
            style,
            fallback_label: None,
        }
    }

    /// Text drawn over the fallback (used for media, not avatars)
    pub fn fallback_label(mut self, label: Option<SharedString>) -> Self {
        self.fallback_label = label;
        self
    }
}

impl RenderOnce for RemoteImage {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.style.colors;
        let shape = self.shape;

        match ImageFace::for_state(&self.state) {
            ImageFace::Placeholder => shaped(div().bg(colors.placeholder), shape).into_any_element(),
            ImageFace::Fallback => fallback_box(shape, colors, self.fallback_label).into_any_element(),
            ImageFace::Image(image) => {
                // Bytes that fail to decode fall back like a failed fetch
                let label = self.fallback_label;
                shaped(
                    img(image)
                        .object_fit(ObjectFit::Cover)
                        .with_fallback(move || {
                            fallback_box(shape, colors, label.clone()).into_any_element()
                        }),
                    shape,
                )
                .into_any_element()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::ImageFormat;

    #[test]
    fn test_face_for_each_state() {
        assert!(matches!(ImageFace::for_state(&LoadState::Empty), ImageFace::Placeholder));
        assert!(matches!(ImageFace::for_state(&LoadState::Loading), ImageFace::Placeholder));
        assert!(matches!(
            ImageFace::for_state(&LoadState::failed("timeout")),
            ImageFace::Fallback
        ));

        let image = Arc::new(Image::from_bytes(ImageFormat::Png, vec![1, 2, 3]));
        match ImageFace::for_state(&LoadState::Loaded(image.clone())) {
            ImageFace::Image(shown) => assert!(Arc::ptr_eq(&shown, &image)),
            other => panic!("expected image, got {other:?}"),
        }
    }
}
