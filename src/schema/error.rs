//! Error types for registry misuse.

use thiserror::Error;

/// Error type for [`Registry`](super::Registry) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An entry with this name is already registered.
    #[error("argument '{name}' is already registered")]
    DuplicateName {
        /// The conflicting name
        name: String,
    },

    /// No entry with this name is registered.
    #[error("no argument named '{name}' is registered")]
    UnknownSchemaName {
        /// The missing name
        name: String,
    },
}
