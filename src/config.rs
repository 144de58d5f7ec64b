//! On-disk configuration: a TOML file under the platform config directory.
//!
//! Every knob defaults to the stock pipeline behavior, so a missing or
//! empty config file changes nothing.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Manages config directory and config file operations
#[derive(Clone)]
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager with a custom config directory (primarily for testing)
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Create a new ConfigManager for the given app name
    pub fn new(app_name: &str) -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| eyre!("Could not determine config directory"))?
            .join(app_name);

        Ok(Self { config_dir })
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get path to a specific config file within the config directory
    pub fn config_path(&self, file: &str) -> PathBuf {
        self.config_dir.join(file)
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Drop blank lines while loading instead of keeping them as empty rows
    pub skip_blank_lines: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// String placed between selected cells on each output line
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: "\t".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Raise the default log filter from warn to debug
    pub enabled: bool,
}

impl AppConfig {
    /// Load `config.toml` from the manager's directory. A missing file is
    /// not an error; it yields the defaults.
    pub fn load(manager: &ConfigManager) -> Result<Self> {
        let path = manager.config_path("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&text)?)
    }
}
