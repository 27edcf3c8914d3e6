//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::SnapGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "title" namespace
pub fn i18n_title(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SnapGlobalStore>().read(cx).locale();
    t!(format!("title.{key}"), locale = locale).into()
}

/// Get translated string from "feed" namespace
pub fn i18n_feed(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<SnapGlobalStore>().read(cx).locale();
    t!(format!("feed.{key}"), locale = locale).into()
}
