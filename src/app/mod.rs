//! Application Layer
//!
//! App initialization, window management and the root shell view.

pub mod application;
pub mod shell;
