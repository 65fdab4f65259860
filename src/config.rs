//! Configuration for termfolio.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termfolio/config.toml`
//! - The display-mode flag
//! - View settings (caret blink, input poll interval)
//!
//! # Configuration File
//!
//! ```toml
//! # Display mode. Accepted for compatibility; the terminal is always dark.
//! dark_mode = true
//!
//! # Log filter used when RUST_LOG is not set
//! log_level = "info"
//!
//! [view]
//! cursor_blink = true
//! poll_interval_ms = 50
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Light or dark appearance requested by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Dark,
    Light,
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display-mode flag
    pub dark_mode: bool,
    /// Default tracing filter
    pub log_level: String,
    /// View settings
    pub view: ViewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dark_mode: true,
            log_level: "info".to_string(),
            view: ViewConfig::default(),
        }
    }
}

/// View configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub cursor_blink: bool,
    pub poll_interval_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            cursor_blink: true,
            poll_interval_ms: 50,
        }
    }
}

impl Config {
    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get config file path
    pub fn default_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.dark_mode {
            DisplayMode::Dark
        } else {
            DisplayMode::Light
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.view.poll_interval_ms.max(1))
    }
}

/// `~/.termfolio`
pub fn data_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(|home| PathBuf::from(home).join(".termfolio"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display_mode(), DisplayMode::Dark);
        assert_eq!(config.poll_interval(), Duration::from_millis(50));
        assert!(config.view.cursor_blink);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("dark_mode = false\n[view]\ncursor_blink = false\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.display_mode(), DisplayMode::Light);
        assert!(!config.view.cursor_blink);
        assert_eq!(config.view.poll_interval_ms, 50);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_toml_is_error() {
        let file = write_config("dark_mode = \"sometimes\"");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn test_poll_interval_never_zero() {
        let file = write_config("[view]\npoll_interval_ms = 0\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(1));
    }
}
