//! Building the effective grammar from an activation set.

use std::collections::HashMap;

use crate::schema::{Registry, SchemaEntry};
use crate::settings::{Settings, SettingsError};

use super::ParseError;

/// Aliases reserved for the built-in help flag.
pub const HELP_ALIASES: [&str; 2] = ["-h", "--help"];

/// Program name used in help when none is set.
pub const DEFAULT_PROGRAM: &str = "jwb-args";

/// An activated flag entry with the aliases it won.
#[derive(Debug, Clone)]
pub struct ActiveFlag<'r> {
    pub(super) entry: &'r SchemaEntry,
    pub(super) aliases: Vec<&'static str>,
}

/// The live subset of a [`Registry`] for one invocation.
///
/// Entries keep activation order, which drives help listing, alias conflict
/// resolution and positional binding. Token matching itself is by flag
/// text.
#[derive(Debug, Clone)]
pub struct Grammar<'r> {
    pub(super) program: String,
    pub(super) flags: Vec<ActiveFlag<'r>>,
    pub(super) positionals: Vec<&'r SchemaEntry>,
    pub(super) by_alias: HashMap<&'static str, usize>,
}

impl<'r> Grammar<'r> {
    /// Activates `names` from `registry`, in order.
    ///
    /// When two activated flags share an alias, the earlier one keeps it.
    /// A name activated twice is only used once.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Registry`] for unregistered names and
    /// [`ParseError::Settings`] for destinations outside the settings schema.
    pub fn activate<S: AsRef<str>>(registry: &'r Registry, names: &[S]) -> Result<Self, ParseError> {
        let mut grammar = Self {
            program: DEFAULT_PROGRAM.to_string(),
            flags: Vec::new(),
            positionals: Vec::new(),
            by_alias: HashMap::new(),
        };
        let mut seen: Vec<&str> = Vec::with_capacity(names.len());

        for name in names {
            let name = name.as_ref();
            if seen.contains(&name) {
                tracing::debug!(name, "Argument activated twice, keeping first");
                continue;
            }
            seen.push(name);

            let entry = registry.lookup(name)?;
            if let Some(dest) = entry.dest() {
                if !Settings::has_field(dest) {
                    return Err(SettingsError::unknown(dest).into());
                }
            }

            if entry.is_positional() {
                grammar.positionals.push(entry);
            } else {
                grammar.add_flag(entry);
            }
        }

        tracing::debug!(
            flags = grammar.flags.len(),
            positionals = grammar.positionals.len(),
            "Grammar activated"
        );
        Ok(grammar)
    }

    /// Sets the program name shown in usage and help.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn add_flag(&mut self, entry: &'r SchemaEntry) {
        let index = self.flags.len();
        let mut won = Vec::with_capacity(entry.aliases().len());

        for &alias in entry.aliases() {
            if HELP_ALIASES.contains(&alias) || self.by_alias.contains_key(alias) {
                tracing::warn!(
                    alias,
                    argument = entry.canonical(),
                    "Flag alias already taken by an earlier argument"
                );
                continue;
            }
            self.by_alias.insert(alias, index);
            won.push(alias);
        }

        self.flags.push(ActiveFlag {
            entry,
            aliases: won,
        });
    }

    /// Finds the activated flag entry owning `alias`.
    #[must_use]
    pub fn flag(&self, alias: &str) -> Option<&'r SchemaEntry> {
        self.by_alias.get(alias).map(|&i| self.flags[i].entry)
    }

    /// Activated positional entries, in binding order.
    #[must_use]
    pub fn positionals(&self) -> &[&'r SchemaEntry] {
        &self.positionals
    }

    /// Program name shown in usage and help.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}
