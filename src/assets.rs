//! Embedded assets for Snapfeed
//!
//! Uses rust-embed to bundle icons at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Icons used by the feed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    /// Favorite / likes
    Heart,
    /// Comments
    Message,
    /// Repost counter
    Repeat,
    /// Send / direct message
    Send,
    /// Post overflow menu
    MoreVertical,
}

impl CustomIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Heart => "icons/heart.svg",
            CustomIconName::Message => "icons/message.svg",
            CustomIconName::Repeat => "icons/repeat.svg",
            CustomIconName::Send => "icons/send.svg",
            CustomIconName::MoreVertical => "icons/more-vertical.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_paths_are_embedded() {
        for icon in [
            CustomIconName::Heart,
            CustomIconName::Message,
            CustomIconName::Repeat,
            CustomIconName::Send,
            CustomIconName::MoreVertical,
        ] {
            let path = icon.path();
            assert!(Assets::get(&path).is_some(), "missing {path}");
        }
    }
}
