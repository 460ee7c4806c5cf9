//! TOML settings file.
//!
//! A flat table whose keys are settings field names:
//!
//! ```toml
//! lang = "S"
//! quality = 720
//! exclude_categories = ["VODMusicVideos"]
//! ```
//!
//! Every key goes through [`Settings::set`], so a key that is not a
//! settings field fails the same way a bad schema destination does.

use std::path::Path;

use crate::settings::{Settings, Value};

use super::ConfigError;

/// Parsed settings file, not yet applied.
#[derive(Debug, Clone, Default)]
pub struct SettingsFile {
    table: toml::Table,
}

impl SettingsFile {
    /// Loads a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses settings file content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table = toml::from_str::<toml::Table>(content)?;
        Ok(Self { table })
    }

    /// Number of keys in the file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the file has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Writes every key into `settings`, in key order.
    ///
    /// # Errors
    ///
    /// Stops at the first unsupported value or rejected key.
    pub fn apply(&self, settings: &mut Settings) -> Result<(), ConfigError> {
        for (key, raw) in &self.table {
            let value = to_value(key, raw)?;
            tracing::debug!(key, %value, "Applying config value");
            settings.set(key, value).map_err(|source| ConfigError::Setting {
                key: key.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

fn to_value(key: &str, raw: &toml::Value) -> Result<Value, ConfigError> {
    let unsupported = || ConfigError::UnsupportedValue {
        key: key.to_string(),
        found: raw.type_str(),
    };

    match raw {
        toml::Value::Boolean(b) => Ok(Value::Bool(*b)),
        toml::Value::Integer(n) => Ok(Value::Int(*n)),
        toml::Value::String(s) => Ok(Value::Text(s.clone())),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(unsupported))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List),
        _ => Err(unsupported()),
    }
}
