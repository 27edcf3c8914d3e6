//! Snapfeed Library
//!
//! A single-screen photo feed: a horizontally scrolling story strip
//! followed by a virtualized list of post cards whose images load
//! asynchronously and are never applied to a recycled row.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod state;
pub mod theme;
pub mod views;
