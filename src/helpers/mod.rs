//! Helper Utilities
//!
//! Common utilities used across the application.

mod fs;
mod logging;

pub use fs::*;
pub use logging::*;
