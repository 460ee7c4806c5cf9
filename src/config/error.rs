//! Error types for loading the settings file.

use std::path::PathBuf;

use thiserror::Error;

use crate::settings::SettingsError;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The TOML value has no settings equivalent (tables, dates, floats,
    /// mixed arrays).
    #[error("Unsupported value for config key '{key}': {found}")]
    UnsupportedValue {
        /// The offending key
        key: String,
        /// TOML type that was found
        found: &'static str,
    },

    /// The settings store rejected the key or value.
    #[error("Invalid config key '{key}': {source}")]
    Setting {
        /// The offending key
        key: String,
        /// Underlying settings error
        #[source]
        source: SettingsError,
    },
}
