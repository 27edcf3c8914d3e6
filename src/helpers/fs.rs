//! File System Utilities
//!
//! Configuration and data directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "snapfeed", "snapfeed").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/snapfeed/` or `$XDG_CONFIG_HOME/snapfeed/`
/// - **macOS**: `~/Library/Application Support/com.snapfeed.snapfeed/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\snapfeed\snapfeed\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Get or create the log directory under the data directory
///
/// - **Linux**: `~/.local/share/snapfeed/logs/`
/// - **macOS**: `~/Library/Application Support/com.snapfeed.snapfeed/logs/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\snapfeed\snapfeed\data\logs\`
pub fn get_or_create_log_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let log_dir = project_dirs.data_dir().join("logs");

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)?;
    }

    Ok(log_dir)
}
