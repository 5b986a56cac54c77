//! Persisted configuration for the horloge clock.
//!
//! The config lives as a small TOML file under the platform config
//! directory. Loading never fails the app: a missing or malformed file
//! falls back to defaults, while saving reports its errors so key
//! handlers can surface them.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use horloge_core::{ColorTheme, TimeFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from persisting the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a config directory")]
    NoConfigDir,
    #[error("failed to write config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User-facing settings, all optional in the file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 12-hour or 24-hour face.
    pub time_format: TimeFormat,
    /// Color theme for the face and text.
    pub theme: ColorTheme,
    /// Delay between frames in milliseconds. Lower is smoother; the
    /// bounce needs well under 100ms to read as motion.
    pub frame_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_format: TimeFormat::default(),
            theme: ColorTheme::default(),
            frame_interval_ms: 33,
        }
    }
}

impl Config {
    /// Path of the config file, if a config directory exists.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "horloge").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(text) => toml::from_str(&text).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Write the configuration back to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path().ok_or(ConfigError::NoConfigDir)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
