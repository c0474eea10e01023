//! TUI configuration persistence
//!
//! Saves and loads the simulated thermostat's settings and display preferences.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thermolock_core::{DeviceAttributes, LockStatus};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "thermolock";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TuiConfig {
    /// Name shown on the thermostat card
    #[serde(default = "default_device_name")]
    pub device_name: String,

    /// Lock state the simulated thermostat starts in
    #[serde(default = "default_initial_status")]
    pub initial_status: LockStatus,

    /// Whether the simulated thermostat demands a code to unlock
    #[serde(default = "default_true")]
    pub requires_code: bool,

    /// Code the simulated thermostat accepts
    #[serde(default = "default_accepted_code")]
    pub accepted_code: String,

    /// Whether the card may toggle the lock at all
    #[serde(default = "default_true")]
    pub toggle_allowed: bool,

    /// UI tick interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Use the high-contrast palette
    #[serde(default)]
    pub high_contrast: bool,
}

fn default_device_name() -> String {
    "Living Room".to_string()
}

fn default_initial_status() -> LockStatus {
    LockStatus::Locked
}

fn default_accepted_code() -> String {
    "1234".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            device_name: default_device_name(),
            initial_status: default_initial_status(),
            requires_code: true,
            accepted_code: default_accepted_code(),
            toggle_allowed: true,
            tick_rate_ms: default_tick_rate_ms(),
            high_contrast: false,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config).join(CONFIG_DIR_NAME);
            return Some(path);
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default location
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Device attributes the simulated thermostat starts with
    pub fn initial_attributes(&self) -> DeviceAttributes {
        DeviceAttributes::new(self.initial_status, self.requires_code)
    }

    /// Tick interval as a duration, never shorter than 10ms
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}
