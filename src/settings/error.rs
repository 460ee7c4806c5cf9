//! Error types for settings writes.

use thiserror::Error;

use super::value::UnknownKeyword;

/// Error type for [`Settings::set`](super::Settings::set) and
/// [`Settings::get`](super::Settings::get).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The field is not part of the declared settings schema.
    #[error("unknown settings field '{name}'")]
    UnknownField {
        /// The rejected field name
        name: String,
    },

    /// The value has the wrong shape for the field.
    #[error("settings field '{field}' expects {expected}, got {found}")]
    TypeMismatch {
        /// Name of the field
        field: &'static str,
        /// Shape the field accepts
        expected: &'static str,
        /// Shape that was supplied
        found: &'static str,
    },

    /// The integer does not fit the field's numeric range.
    #[error("value {value} is out of range for settings field '{field}'")]
    OutOfRange {
        /// Name of the field
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// The text is not one of the field's keywords.
    #[error("invalid value for settings field '{field}': {source}")]
    Keyword {
        /// Name of the field
        field: &'static str,
        /// Underlying keyword error
        #[source]
        source: UnknownKeyword,
    },
}

impl SettingsError {
    /// Creates an `UnknownField` error.
    #[must_use]
    pub fn unknown(name: &str) -> Self {
        Self::UnknownField {
            name: name.to_string(),
        }
    }
}
