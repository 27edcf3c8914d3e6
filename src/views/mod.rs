//! View Components
//!
//! ## Layout Structure
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ TitleBar            [likes] [direct] │
//! ├──────────────────────────────────────┤
//! │ ○ ○ ○ ○ ○ ○   story strip  ──►       │
//! ├──────────────────────────────────────┤
//! │ post card                            │
//! │ post card                            │
//! │ ...                 (virtualized)    │
//! └──────────────────────────────────────┘
//! ```

mod feed_view;
mod title_bar;

pub use feed_view::*;
pub use title_bar::*;
