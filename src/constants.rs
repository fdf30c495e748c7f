//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the names of generated files.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "XKB Layout";

/// The binary name of the application (used in command examples and generated headers).
pub const APP_BINARY_NAME: &str = "xkblayout";

/// Directory name used below the platform config directory.
pub const CONFIG_DIR_NAME: &str = "xkblayout";

/// File name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
