//! Configuration loading and database path resolution

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::media::preview::DEFAULT_PREVIEW_SIZE;

/// Directory name used under the platform config and data directories
const APP_DIR: &str = "product-labels";

/// User settings, read from `config.toml`
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SQLite database file holding the labels table
    pub database_path: PathBuf,
    /// Preview bounding box in pixels
    pub thumbnail_size: u32,
    /// Directory the export dialogs open in
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            thumbnail_size: DEFAULT_PREVIEW_SIZE,
            export_dir: None,
        }
    }
}

impl Config {
    /// Resolve the configuration:
    /// 1. Explicit file (command line or environment), which must exist
    /// 2. `<config dir>/product-labels/config.toml`, if present
    /// 3. Built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Replace the database path when one was given on the command line
    pub fn with_database(mut self, database: Option<PathBuf>) -> Self {
        if let Some(path) = database {
            self.database_path = path;
        }
        self
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Get the path where the database should be stored
/// - Linux: ~/.local/share/product-labels/product_labels.db
/// - macOS: ~/Library/Application Support/product-labels/product_labels.db
/// - Windows: %APPDATA%\product-labels\product_labels.db
fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("product_labels.db")
}
