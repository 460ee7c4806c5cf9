//! Argument schema layer.
//!
//! This module provides:
//! - Declarative argument definitions ([`SchemaEntry`], [`Arity`], [`ValueKind`])
//! - The registry they live in ([`Registry`])
//! - The predefined argument table ([`predefined`])
//! - Error handling ([`RegistryError`])

mod entry;
mod error;
pub mod predefined;
mod registry;


pub use entry::{Arity, SchemaEntry, ValueKind};
pub use error::RegistryError;
pub use registry::Registry;
