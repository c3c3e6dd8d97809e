//! Configuration and log paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/suite-adapter/` and `~/.local/share/suite-adapter/`
//! - macOS: `~/Library/Application Support/suite-adapter/`
//! - Windows: `%APPDATA%\suite-adapter\`

use std::io;
use std::path::PathBuf;

/// Application name used for config and data directories
const APP_NAME: &str = "suite-adapter";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the path to the log directory
pub fn log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("logs"))
}

/// Default log file used by `--log-file` without a value
pub fn default_log_file() -> Option<PathBuf> {
    log_dir().map(|d| d.join("suite-adapter.log"))
}

/// Ensure the parent directory of a log file exists
pub fn ensure_parent_dir(path: &std::path::Path) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(())
}
