//! Configuration for pathquill's files cache.
//!
//! This module provides the configuration structure with sensible defaults and
//! support for serialization/deserialization via serde. Configuration is
//! loaded from and saved to TOML files.
//!
//! # Example
//!
//! ```
//! use pathquill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.manifest_file, "cache-manifest.json");
//! assert!(!config.compress);
//!
//! // Create custom configuration
//! let custom = Config {
//!     cache_folder: "/tmp/cache".to_string(),
//!     compress: true,
//!     ..Config::default()
//! };
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a [`FilesCache`](crate::cache::FilesCache).
///
/// # Fields
///
/// * `cache_folder` - Folder holding cached copies and the manifest (default: ".pathquill-cache")
/// * `manifest_file` - Manifest file name inside the cache folder (default: "cache-manifest.json")
/// * `compress` - Store cached copies gzip-compressed (default: false)
/// * `pretty_manifest` - Write the manifest as indented JSON (default: true)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding cached copies and the manifest
    #[serde(default = "default_cache_folder")]
    pub cache_folder: String,

    /// Manifest file name inside the cache folder
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Store cached copies gzip-compressed
    #[serde(default)]
    pub compress: bool,

    /// Write the manifest as indented JSON
    #[serde(default = "default_pretty_manifest")]
    pub pretty_manifest: bool,
}

fn default_cache_folder() -> String {
    ".pathquill-cache".to_string()
}

fn default_manifest_file() -> String {
    "cache-manifest.json".to_string()
}

fn default_pretty_manifest() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_folder: default_cache_folder(),
            manifest_file: default_manifest_file(),
            compress: false,
            pretty_manifest: default_pretty_manifest(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/pathquill/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("pathquill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Loads configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses configuration from TOML text; missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
