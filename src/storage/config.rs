//! Configuration handling
//!
//! Configuration is stored in `config.toml` under the platform config
//! directory (`~/.config/rescue/config.toml` on Linux). Every key is
//! optional; a missing file is the same as an empty one.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::CalendarDate;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("No record file given. Pass --file, set RESCUE_FILE, or set default_file in {0}")]
    NoRecordFile(String),
}

/// Output format for commands
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Record file used when `--file` is omitted
    pub default_file: Option<PathBuf>,

    /// Output format used when `--format` is omitted
    pub default_format: Option<OutputFormat>,

    /// Fixed "today" for age and day-count reports
    pub today: Option<CalendarDate>,
}

impl Config {
    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("org", "rescue-ledger", "rescue")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Picks the record file: an explicit path wins over `default_file`
    pub fn record_file(&self, explicit: Option<PathBuf>) -> Result<PathBuf> {
        explicit
            .or_else(|| self.default_file.clone())
            .ok_or_else(|| {
                let location = Self::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "config.toml".to_string());
                ConfigError::NoRecordFile(location).into()
            })
    }

    /// Picks the output format: an explicit format wins over `default_format`
    pub fn format(&self, explicit: Option<OutputFormat>) -> OutputFormat {
        explicit.or(self.default_format).unwrap_or_default()
    }

    /// Picks the date reports are computed against
    ///
    /// An explicit date wins, then the configured `today`, then the system
    /// clock.
    pub fn today(&self, explicit: Option<CalendarDate>) -> Result<CalendarDate> {
        match explicit.or(self.today) {
            Some(date) => Ok(date),
            None => CalendarDate::today().context("System date is outside the supported range"),
        }
    }
}
