//! Configuration management (`<config dir>/config.toml`)
//!
//! Handles loading and providing defaults for the imagery provider settings.
//! The credential may also come from the `API_KEY` environment variable,
//! which takes precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{PanoramaError, Result};

/// Environment variable holding the imagery provider credential.
pub const API_KEY_ENV: &str = "API_KEY";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Imagery provider settings
    #[serde(default)]
    pub streetview: StreetViewConfig,
}

/// Street View Static API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetViewConfig {
    /// Request endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Edge length of the square images in pixels (default: 1024)
    #[serde(default = "default_image_size")]
    pub image_size: u32,
    /// Horizontal field of view in degrees (default: 90)
    #[serde(default = "default_fov")]
    pub fov: u32,
    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Credential; overridden by `API_KEY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    "https://maps.googleapis.com/maps/api/streetview".to_string()
}
fn default_image_size() -> u32 {
    1024
}
fn default_fov() -> u32 {
    90
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for StreetViewConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            image_size: default_image_size(),
            fov: default_fov(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
        }
    }
}

impl StreetViewConfig {
    /// `size` query value, e.g. `1024x1024`.
    pub fn size_param(&self) -> String {
        format!("{}x{}", self.image_size, self.image_size)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Replace the file credential with `API_KEY` if it is set and non-empty.
    pub fn apply_env(&mut self) {
        self.override_api_key(std::env::var(API_KEY_ENV).ok());
    }

    /// Take `key` over the configured credential unless it is missing or empty.
    pub fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.is_empty()) {
            self.api_key = Some(key);
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Panopack\config`
/// On macOS: `~/Library/Application Support/io.panopack.Panopack`
/// On Linux: `~/.config/Panopack`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.panopack", "", "Panopack")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    config_dir()
        .and_then(|dir| std::fs::read_to_string(dir.join("config.toml")).ok())
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Unlike [`load`], a missing or malformed file is an error.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| PanoramaError::io(path, e))?;
    parse(&content).map_err(|message| PanoramaError::Config {
        path: path.to_path_buf(),
        message,
    })
}

fn parse(content: &str) -> std::result::Result<Config, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}
