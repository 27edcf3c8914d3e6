//! State Management Layer
//!
//! Application settings and the feed screen's state. Data flows one way:
//!
//! ```text
//! Feed snapshot → FeedState → list scroll → RowPool::materialize → load tickets
//!       ▲                                                              │
//!       └──────────── apply (generation-checked) ◄── ImageLoader ◄─────┘
//! ```

mod app;
mod feed_state;
mod i18n;
mod row_pool;

pub use app::*;
pub use feed_state::*;
pub use i18n::*;
pub use row_pool::*;
