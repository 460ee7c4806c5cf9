//! Configuration layer.
//!
//! This module provides:
//! - Outer CLI parsing ([`Cli`], [`Command`])
//! - The TOML settings file ([`SettingsFile`])
//! - Building the starting settings ([`load_settings`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Command-line arguments** - parsed by the schema parser, in token order
//! 2. **TOML settings file** - given with `--config`
//! 3. **Built-in defaults** - [`crate::settings::defaults`]
//!
//! The file is only read. Nothing is ever written back.

mod cli;
mod error;
mod toml;

#[cfg(test)]
mod cli_tests;
#[cfg(test)]
mod toml_tests;

use std::path::Path;

use crate::settings::Settings;

pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use toml::SettingsFile;

/// Builds the starting settings: defaults, overlaid with `path` if given.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or holds an invalid key.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();
    if let Some(path) = path {
        let file = SettingsFile::load(path)?;
        file.apply(&mut settings)?;
        tracing::debug!(path = %path.display(), keys = file.len(), "Loaded settings file");
    }
    Ok(settings)
}
