//! Feed Style - Explicit Styling Value
//!
//! Built once from settings and handed to every feed component, so
//! rendering never depends on ambient theme state.

use super::colors::FeedColors;
use gpui_component::ThemeMode;

/// Width of the ring drawn around story avatars
pub const STORY_RING_WIDTH: f32 = 2.0;

/// Sizes used by the feed components, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedMetrics {
    pub title_size: f32,
    pub story_avatar: f32,
    pub story_inset: f32,
    pub story_label_size: f32,
    pub story_spacing: f32,
    pub post_avatar: f32,
    pub media_height: f32,
    pub action_icon: f32,
    pub action_gap: f32,
    pub counter_gap: f32,
    pub row_padding: f32,
    pub card_spacing: f32,
}

impl Default for FeedMetrics {
    fn default() -> Self {
        Self {
            title_size: 24.0,
            story_avatar: 70.0,
            story_inset: 3.0,
            story_label_size: 12.0,
            story_spacing: 8.0,
            post_avatar: 40.0,
            media_height: 400.0,
            action_icon: 28.0,
            action_gap: 16.0,
            counter_gap: 4.0,
            row_padding: 8.0,
            card_spacing: 16.0,
        }
    }
}

/// Colors and metrics for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeedStyle {
    pub colors: FeedColors,
    pub metrics: FeedMetrics,
}

impl FeedStyle {
    pub fn for_mode(mode: ThemeMode) -> Self {
        Self {
            colors: FeedColors::for_mode(mode),
            metrics: FeedMetrics::default(),
        }
    }

    /// Diameter of the image inside a story ring
    pub fn story_image_size(&self) -> f32 {
        let m = &self.metrics;
        (m.story_avatar - 2.0 * (STORY_RING_WIDTH + m.story_inset)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_image_fits_inside_ring() {
        let style = FeedStyle::default();
        assert_eq!(style.story_image_size(), 60.0);
    }

    #[test]
    fn test_mode_selects_palette() {
        assert_eq!(FeedStyle::for_mode(ThemeMode::Dark).colors, FeedColors::dark());
        assert_eq!(FeedStyle::for_mode(ThemeMode::Light).colors, FeedColors::light());
    }
}
