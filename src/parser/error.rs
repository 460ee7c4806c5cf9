//! Error types for activation and parsing.

use thiserror::Error;

use crate::coerce::CoercionError;
use crate::languages::FetchError;
use crate::schema::RegistryError;
use crate::settings::SettingsError;

/// Error type for [`Grammar::activate`](super::Grammar::activate) and
/// [`Grammar::parse`](super::Grammar::parse).
///
/// Every error aborts the whole parse; no partial result is returned.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A destination or write is outside the settings schema.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// An activated name is not registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// No activated flag or free positional matches the token.
    #[error("unrecognized argument: {token}")]
    UnrecognizedFlag {
        /// The unmatched token
        token: String,
    },

    /// A flag that needs a value, or a required positional, got none.
    #[error("argument {name}: expected one argument")]
    MissingValue {
        /// Display name of the argument
        name: String,
    },

    /// An inline `--flag=value` was given to a flag that takes no value.
    #[error("argument {name}: ignored explicit argument '{value}'")]
    UnexpectedValue {
        /// Display name of the argument
        name: String,
        /// The inline value
        value: String,
    },

    /// The decoded value is not one of the allowed choices.
    #[error("argument {name}: invalid choice: '{value}' (choose from {choices})")]
    InvalidChoice {
        /// Display name of the argument
        name: String,
        /// The rejected value
        value: String,
        /// Comma separated allowed values
        choices: String,
    },

    /// Decoding or coercing the value failed.
    #[error("argument {name}: {source}")]
    Validation {
        /// Display name of the argument
        name: String,
        /// Underlying coercion error
        #[source]
        source: CoercionError,
    },

    /// A coercion needed the remote language list and could not get it.
    #[error("argument {name}: {source}")]
    Network {
        /// Display name of the argument
        name: String,
        /// Underlying fetch error
        #[source]
        source: FetchError,
    },

    /// Help output could not be written.
    #[error("failed to write help: {0}")]
    Output(#[source] std::io::Error),
}

impl ParseError {
    /// Wraps a coercion failure, keeping network failures distinct.
    #[must_use]
    pub fn coercion(name: String, error: CoercionError) -> Self {
        match error {
            CoercionError::Network(source) => Self::Network { name, source },
            source => Self::Validation { name, source },
        }
    }

    /// Returns true for errors caused by the command line itself.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        !matches!(self, Self::Network { .. } | Self::Output(_))
    }
}
