//! Coercion actions and the context they run in.

use std::fmt;
use std::io::Write;

use crate::languages::LanguageSource;
use crate::settings::Value;

use super::CoercionError;

/// Transforms a decoded value before it is stored.
pub type ValueFn = fn(Value, &Context<'_>) -> Result<Value, CoercionError>;

/// Produces output and ends parsing.
pub type TerminalFn = fn(&mut Context<'_>) -> Result<Terminate, CoercionError>;

/// A coercion attached to a schema entry.
///
/// Stored as plain data in the registry table.
#[derive(Debug, Clone, Copy)]
pub enum Coercion {
    /// Maps the decoded value to the value written into settings.
    Value(ValueFn),
    /// Writes output and stops the parse with [`Terminate`]; nothing is stored.
    Terminal(TerminalFn),
}

/// Request to end the process after a terminal action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminate {
    /// Process exit code
    pub exit_code: u8,
}

impl Terminate {
    /// Successful termination (exit code 0).
    pub const SUCCESS: Self = Self { exit_code: 0 };
}

/// Collaborators available to coercions during one parse.
pub struct Context<'a> {
    languages: &'a dyn LanguageSource,
    output: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    /// Creates a context reading languages from `languages` and writing
    /// terminal output to `output`.
    pub fn new(languages: &'a dyn LanguageSource, output: &'a mut dyn Write) -> Self {
        Self { languages, output }
    }

    /// The language source.
    #[must_use]
    pub fn languages(&self) -> &dyn LanguageSource {
        self.languages
    }

    /// The writer for terminal output.
    pub fn output(&mut self) -> &mut dyn Write {
        &mut *self.output
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context").finish_non_exhaustive()
    }
}
