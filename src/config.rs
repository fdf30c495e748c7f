//! Configuration management for the application.
//!
//! This module handles loading and validating the optional application
//! configuration in TOML format with platform-specific directory resolution.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::keymap::KeymapOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keymap output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeymapConfig {
    /// Name of the emitted `xkb_symbols` block
    pub symbols_name: String,
    /// Keymap file written when no `--keymap` flag is given
    pub output: Option<PathBuf>,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            symbols_name: KeymapOptions::default().symbols_name,
            output: None,
        }
    }
}

/// Diagram output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DiagramConfig {
    /// Diagram file written when no `--diagram` flag is given
    pub output: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/xkblayout/config.toml`
/// - macOS: `~/Library/Application Support/xkblayout/config.toml`
/// - Windows: `%APPDATA%\xkblayout\config.toml`
///
/// # Validation
///
/// - `keymap.symbols_name` must be non-empty, without whitespace or quotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Print debug diagnostics
    pub verbose: bool,
    /// Keymap settings
    pub keymap: KeymapConfig,
    /// Diagram settings
    pub diagram: DiagramConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the default config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file, which must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let name = &self.keymap.symbols_name;

        if name.is_empty() {
            anyhow::bail!("keymap.symbols_name cannot be empty");
        }

        if name.chars().any(|c| c.is_whitespace() || c == '"') {
            anyhow::bail!(
                "keymap.symbols_name '{name}' must not contain whitespace or double quotes"
            );
        }

        Ok(())
    }

    /// Keymap generation options derived from this configuration.
    #[must_use]
    pub fn keymap_options(&self) -> KeymapOptions {
        KeymapOptions {
            symbols_name: self.keymap.symbols_name.clone(),
        }
    }
}
