//! UI Constants
//!
//! Centralized layout and loading constants for the feed screen.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 420.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Story strip defaults
pub const DEFAULT_STORY_COUNT: usize = 10;
pub const DEFAULT_STORY_IMAGE_URL: &str = "https://picsum.photos/100/100";

/// Virtualization defaults
pub const DEFAULT_OVERSCAN_ROWS: usize = 2;
pub const DEFAULT_MAX_LIVE_ROWS: usize = 12;
/// Rows assumed visible before the list reports its first scroll event
pub const INITIAL_VISIBLE_ITEMS: usize = 3;
/// Extra pixels the list lays out beyond the viewport
pub const LIST_OVERDRAW: f32 = 400.0;

/// Image loading
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 64;
pub const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;
pub const HTTP_USER_AGENT: &str = concat!("snapfeed/", env!("CARGO_PKG_VERSION"));
