//! Settings layer.
//!
//! This module provides:
//! - The closed-world settings container ([`Settings`])
//! - Dynamic values written into it by name ([`Value`])
//! - Keyword enums for enumerated fields ([`Mode`], [`Download`])
//! - Default values ([`defaults`])
//!
//! # Closed world
//!
//! [`Settings::set`] accepts only names listed in [`Settings::FIELDS`].
//! Anything else fails with [`SettingsError::UnknownField`], whether the
//! write comes from a schema entry, a config file or a test.

pub mod defaults;
mod error;
mod store;
mod value;


pub use error::SettingsError;
pub use store::Settings;
pub use value::{Download, Mode, UnknownKeyword, Value};
