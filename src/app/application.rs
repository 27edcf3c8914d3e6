//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions, actions, px, size,
};
use gpui_component::{Root, Theme};
use std::sync::Arc;
use tracing::{error, info};

use crate::app::shell::AppShell;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::domain::Feed;
use crate::services::{
    CachedImageLoader, FeedKind, HttpImageLoader, ImageLoader, UnavailableImageLoader,
};
use crate::state::{AppSettings, SnapGlobalStore, i18n_title};
use crate::theme::FeedStyle;

actions!(snapfeed, [Quit]);

/// Build the feed from the configured source; a bad source yields an empty feed
fn load_feed(kind: FeedKind) -> Feed {
    let source = kind.source();
    match Feed::new(source.posts()) {
        Ok(feed) => {
            info!(feed = source.name(), posts = feed.len(), "Feed loaded");
            feed
        }
        Err(e) => {
            error!(feed = source.name(), error = %e, "Invalid feed, showing no posts");
            Feed::empty()
        }
    }
}

/// HTTP loader behind the shared cache, or a loader that always fails
fn build_image_loader(cache_capacity: usize) -> Arc<dyn ImageLoader> {
    match HttpImageLoader::new() {
        Ok(http) => Arc::new(CachedImageLoader::new(http, cache_capacity)),
        Err(e) => {
            error!(error = %e, "HTTP client unavailable, images will show fallbacks");
            Arc::new(UnavailableImageLoader::new(e.to_string()))
        }
    }
}

/// Run the Snapfeed application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let settings = AppSettings::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load settings, using defaults");
            AppSettings::default()
        });
        let theme = settings.theme();
        let feed = load_feed(settings.feed());
        let feed_settings = settings.feed_settings();
        let loader = build_image_loader(settings.image_cache_capacity());

        let settings = cx.new(|_| settings);
        cx.set_global(SnapGlobalStore::new(settings));
        Theme::change(theme, None, cx);

        let style = FeedStyle::for_mode(theme);
        let title: SharedString = i18n_title(cx, "app");

        // Create main window
        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(title),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            let shell =
                cx.new(|cx| AppShell::new(feed, &feed_settings, loader, style, window, cx));
            cx.new(|cx| Root::new(AnyView::from(shell), window, cx))
        });
        if let Err(e) = opened {
            error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::LoadState;

    #[test]
    fn test_load_feed_uses_configured_source() {
        assert_eq!(load_feed(FeedKind::Sample).len(), 2);
        assert_eq!(load_feed(FeedKind::Preview).len(), 2);
    }

    #[test]
    fn test_image_loader_passes_blank_urls_through() {
        let loader = build_image_loader(4);
        let state = futures::executor::block_on(loader.load(""));
        assert!(matches!(state, LoadState::Empty));
    }
}
