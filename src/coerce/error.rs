//! Error types for value coercion.

use std::num::ParseIntError;

use thiserror::Error;

use crate::languages::FetchError;

/// Error type for coercion actions.
///
/// Every variant aborts the parse that triggered the coercion.
#[derive(Debug, Error)]
pub enum CoercionError {
    /// The token is not an integer.
    #[error("invalid integer value '{value}': {source}")]
    InvalidInteger {
        /// The rejected token
        value: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// The token is not a `YYYY-MM-DD` date.
    #[error("invalid date '{value}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        /// The rejected token
        value: String,
        /// Underlying chrono error
        #[source]
        source: chrono::ParseError,
    },

    /// Local midnight does not exist on that date (DST gap).
    #[error("date '{value}' has no local midnight")]
    NonexistentLocalTime {
        /// The rejected date
        value: String,
    },

    /// A size was negative.
    #[error("size must not be negative, got {value}")]
    NegativeSize {
        /// The rejected size
        value: i64,
    },

    /// A size does not fit in bytes.
    #[error("size of {value} MiB is too large")]
    SizeOverflow {
        /// The rejected size
        value: i64,
    },

    /// The language code is neither `E` nor in the remote list.
    #[error("{code}: invalid language code")]
    UnknownLanguage {
        /// The rejected code
        code: String,
    },

    /// The value handed to the coercion had the wrong shape.
    #[error("expected {expected} value, got {found}")]
    Expected {
        /// Shape the coercion accepts
        expected: &'static str,
        /// Shape that was supplied
        found: &'static str,
    },

    /// The language list could not be fetched.
    #[error(transparent)]
    Network(#[from] FetchError),

    /// Terminal output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
