//! User preferences, stored as JSON in the OS config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::filter::StatusFilter;

const CONFIG_FILE: &str = "config.json";

/// Persisted user settings. Missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Start each session with the sample projects instead of an empty store.
    pub seed_sample_data: bool,
    /// Tab selected when a task list is opened.
    pub default_status_filter: StatusFilter,
    /// Font with CJK glyphs. When unset a few common system locations are tried.
    pub cjk_font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 780.0,
            log_level: "info".into(),
            seed_sample_data: true,
            default_status_filter: StatusFilter::All,
            cjk_font_path: None,
        }
    }
}

impl AppConfig {
    /// `<config dir>/Hibi`, if the platform has one.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "Hibi").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE))
    }

    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read settings from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        Self::load_from(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }
}
