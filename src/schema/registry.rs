//! The registry of reusable argument definitions.

use std::collections::HashMap;

use super::{RegistryError, SchemaEntry, predefined};

/// Mapping from canonical name to [`SchemaEntry`].
///
/// Built once at startup and shared by reference afterwards; nothing in the
/// parser mutates it.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, SchemaEntry>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry holding every predefined argument.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if the table repeats a name.
    pub fn predefined() -> Result<Self, RegistryError> {
        Self::from_entries(predefined::entries())
    }

    /// Builds a registry, keying each entry by its canonical name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] on a repeated canonical name.
    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = SchemaEntry>,
    {
        let mut registry = Self::new();
        for entry in entries {
            registry.register(entry.canonical(), entry)?;
        }
        Ok(registry)
    }

    /// Registers `entry` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if `name` is taken; the
    /// existing entry is kept.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        entry: SchemaEntry,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Looks up the entry registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownSchemaName`] if absent.
    pub fn lookup(&self, name: &str) -> Result<&SchemaEntry, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::UnknownSchemaName {
                name: name.to_string(),
            })
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
