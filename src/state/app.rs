//! Application Settings
//!
//! Settings are read from `snapfeed.toml` in the platform config directory.
//! Every key is optional; getters fall back to the built-in defaults.

use crate::constants::{
    DEFAULT_IMAGE_CACHE_CAPACITY, DEFAULT_MAX_LIVE_ROWS, DEFAULT_OVERSCAN_ROWS,
    DEFAULT_STORY_COUNT, DEFAULT_STORY_IMAGE_URL,
};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::FeedKind;
use gpui::{App, Entity, Global};
use gpui_component::ThemeMode;
use locale_config::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("snapfeed.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    locale: Option<String>,
    theme: Option<String>,
    feed: Option<FeedKind>,
    story_count: Option<usize>,
    story_image_url: Option<String>,
    overscan_rows: Option<usize>,
    max_live_rows: Option<usize>,
    image_cache_capacity: Option<usize>,
}

/// Resolved values the feed screen is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    pub story_count: usize,
    pub story_image_url: String,
    pub overscan_rows: usize,
    pub max_live_rows: usize,
}

impl AppSettings {
    /// Load settings from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(&path)?;

        let mut settings = Self::from_toml_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;

        // Detect system locale if not set
        if settings.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                settings.locale = Some(lang.to_string());
            }
        }

        Ok(settings)
    }

    /// Parse settings; an empty document yields defaults
    pub fn from_toml_str(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en")
    }

    pub fn theme(&self) -> ThemeMode {
        match self.theme.as_deref() {
            Some(DARK_THEME_MODE) => ThemeMode::Dark,
            Some(LIGHT_THEME_MODE) | None => ThemeMode::Light,
            Some(other) => {
                error!(theme = other, "Unknown theme, using light");
                ThemeMode::Light
            }
        }
    }

    pub fn feed(&self) -> FeedKind {
        self.feed.unwrap_or_default()
    }

    pub fn image_cache_capacity(&self) -> usize {
        self.image_cache_capacity
            .unwrap_or(DEFAULT_IMAGE_CACHE_CAPACITY)
            .max(1)
    }

    pub fn feed_settings(&self) -> FeedSettings {
        FeedSettings {
            story_count: self.story_count.unwrap_or(DEFAULT_STORY_COUNT),
            story_image_url: self
                .story_image_url
                .clone()
                .unwrap_or_else(|| DEFAULT_STORY_IMAGE_URL.to_string()),
            overscan_rows: self.overscan_rows.unwrap_or(DEFAULT_OVERSCAN_ROWS),
            max_live_rows: self.max_live_rows.unwrap_or(DEFAULT_MAX_LIVE_ROWS).max(1),
        }
    }
}

impl Default for FeedSettings {
    fn default() -> Self {
        AppSettings::default().feed_settings()
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<SnapGlobalStore>()`
#[derive(Clone)]
pub struct SnapGlobalStore {
    settings: Entity<AppSettings>,
}

impl SnapGlobalStore {
    pub fn new(settings: Entity<AppSettings>) -> Self {
        Self { settings }
    }

    /// Read settings
    pub fn read<'a>(&self, cx: &'a App) -> &'a AppSettings {
        self.settings.read(cx)
    }
}

impl Global for SnapGlobalStore {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = AppSettings::from_toml_str("  \n").expect("parse");
        assert_eq!(settings.locale(), "en");
        assert_eq!(settings.theme(), ThemeMode::Light);
        assert_eq!(settings.feed(), FeedKind::Sample);
        assert_eq!(settings.image_cache_capacity(), DEFAULT_IMAGE_CACHE_CAPACITY);

        let feed = settings.feed_settings();
        assert_eq!(feed.story_count, 10);
        assert_eq!(feed.story_image_url, "https://picsum.photos/100/100");
        assert_eq!(feed.overscan_rows, DEFAULT_OVERSCAN_ROWS);
        assert_eq!(feed.max_live_rows, DEFAULT_MAX_LIVE_ROWS);
    }

    #[test]
    fn test_parse_overrides() {
        let settings = AppSettings::from_toml_str(
            r#"
            locale = "zh"
            theme = "dark"
            feed = "preview"
            story_count = 4
            max_live_rows = 0
            image_cache_capacity = 8
            "#,
        )
        .expect("parse");
        assert_eq!(settings.locale(), "zh");
        assert_eq!(settings.theme(), ThemeMode::Dark);
        assert_eq!(settings.feed(), FeedKind::Preview);
        assert_eq!(settings.image_cache_capacity(), 8);

        let feed = settings.feed_settings();
        assert_eq!(feed.story_count, 4);
        assert_eq!(feed.max_live_rows, 1);
    }

    #[test]
    fn test_invalid_document_is_error() {
        assert!(AppSettings::from_toml_str("story_count = \"many\"").is_err());
        assert!(AppSettings::from_toml_str("feed = \"remote\"").is_err());
    }
}
