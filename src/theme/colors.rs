//! Colors - Feed Palette

use gpui::{Rgba, rgb, rgba};
use gpui_component::ThemeMode;

/// Color palette for the feed screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedColors {
    /// Window background
    pub background: Rgba,
    /// Title bar background
    pub title_bar_bg: Rgba,
    /// Primary text
    pub text_primary: Rgba,
    /// Secondary text (story labels)
    pub text_secondary: Rgba,
    /// Icon tint
    pub icon: Rgba,
    /// Icon hover background
    pub icon_hover: Rgba,
    /// Story avatar ring
    pub story_ring: Rgba,
    /// Image placeholder while loading or without a URL
    pub placeholder: Rgba,
    /// Image fallback after a failed load
    pub fallback: Rgba,
    /// Text drawn over the fallback
    pub fallback_text: Rgba,
    /// Divider below the title bar
    pub border: Rgba,
}

impl FeedColors {
    pub fn light() -> Self {
        Self {
            background: rgb(0xffffff),
            title_bar_bg: rgb(0xffffff),
            text_primary: rgb(0x111827),
            text_secondary: rgb(0x4b5563),
            icon: rgb(0x111827),
            icon_hover: rgb(0xf3f4f6),
            story_ring: rgb(0xff00ff),
            placeholder: rgb(0xe5e7eb),
            fallback: rgb(0xd1d5db),
            fallback_text: rgb(0x6b7280),
            border: rgb(0xe5e7eb),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: rgb(0x0b0b0f),
            title_bar_bg: rgb(0x111118),
            text_primary: rgb(0xf3f4f6),
            text_secondary: rgb(0x9ca3af),
            icon: rgb(0xf3f4f6),
            icon_hover: rgba(0xffffff1a),
            story_ring: rgb(0xff00ff),
            placeholder: rgb(0x1f2937),
            fallback: rgb(0x374151),
            fallback_text: rgb(0x9ca3af),
            border: rgb(0x1f2937),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            _ => Self::light(),
        }
    }
}

impl Default for FeedColors {
    fn default() -> Self {
        Self::light()
    }
}
