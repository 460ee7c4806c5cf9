//! Declarative argument definitions.

use crate::coerce::{Coercion, TerminalFn, ValueFn};
use crate::settings::Value;

/// How many tokens a matched entry consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No value token; stores the constant or runs a terminal action.
    Flag,
    /// No value token; increments the stored count.
    Count,
    /// Exactly one value token.
    One,
    /// One value token if present, the constant otherwise.
    OptionalOne,
    /// Every remaining token, verbatim. Positionals only.
    Remainder,
}

impl Arity {
    /// Returns true if the entry reads a value token.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::One | Self::OptionalOne)
    }
}

/// Structural type of a value token before coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    /// Kept as text.
    #[default]
    Text,
    /// Parsed as a base-10 integer.
    Integer,
}

/// One reusable argument definition.
///
/// Aliases starting with `-` make an optional (flag) entry; a single bare
/// name makes a positional. The canonical name is the first alias.
///
/// # Example
///
/// ```
/// use jwb_args::schema::{Arity, SchemaEntry, ValueKind};
///
/// let quality = SchemaEntry::new(&["--quality", "-Q"], Arity::One)
///     .with_kind(ValueKind::Integer)
///     .with_choices([240_i64, 360, 480, 720])
///     .with_help("maximum video quality");
///
/// assert_eq!(quality.canonical(), "--quality");
/// assert_eq!(quality.dest(), Some("quality"));
/// ```
#[derive(Debug, Clone)]
pub struct SchemaEntry {
    aliases: Vec<&'static str>,
    dest: Option<String>,
    arity: Arity,
    kind: ValueKind,
    choices: Option<Vec<Value>>,
    constant: Value,
    coercion: Option<Coercion>,
    metavar: Option<&'static str>,
    help: &'static str,
}

impl SchemaEntry {
    /// Creates an entry. The destination defaults to the first long alias
    /// without dashes, with `-` replaced by `_` (or the positional name).
    ///
    /// `aliases` must not be empty.
    #[must_use]
    pub fn new(aliases: &[&'static str], arity: Arity) -> Self {
        let dest = aliases
            .iter()
            .find(|a| a.starts_with("--"))
            .or_else(|| aliases.first())
            .map(|a| default_dest(a));

        Self {
            aliases: aliases.to_vec(),
            dest,
            arity,
            kind: ValueKind::Text,
            choices: None,
            constant: Value::Unset,
            coercion: None,
            metavar: None,
            help: "",
        }
    }

    /// Creates a flag that stores a fixed boolean.
    #[must_use]
    pub fn toggle(aliases: &[&'static str], value: bool) -> Self {
        Self::new(aliases, Arity::Flag).with_constant(value)
    }

    /// Sets the destination field.
    #[must_use]
    pub fn with_dest(mut self, dest: &str) -> Self {
        self.dest = Some(dest.to_string());
        self
    }

    /// Sets how value tokens are decoded.
    #[must_use]
    pub const fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Restricts decoded values to `choices`.
    #[must_use]
    pub fn with_choices<I, V>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the constant stored by flags and by value-less `OptionalOne`.
    #[must_use]
    pub fn with_constant(mut self, constant: impl Into<Value>) -> Self {
        self.constant = constant.into();
        self
    }

    /// Transforms decoded values with `action` before storing them.
    #[must_use]
    pub fn with_value_action(mut self, action: ValueFn) -> Self {
        self.coercion = Some(Coercion::Value(action));
        self
    }

    /// Makes the entry terminal. Terminal entries never store anything, so
    /// the destination is cleared.
    #[must_use]
    pub fn with_terminal_action(mut self, action: TerminalFn) -> Self {
        self.coercion = Some(Coercion::Terminal(action));
        self.dest = None;
        self
    }

    /// Sets the placeholder shown in help.
    #[must_use]
    pub const fn with_metavar(mut self, metavar: &'static str) -> Self {
        self.metavar = Some(metavar);
        self
    }

    /// Sets the help text.
    #[must_use]
    pub const fn with_help(mut self, help: &'static str) -> Self {
        self.help = help;
        self
    }

    /// The first alias.
    #[must_use]
    pub fn canonical(&self) -> &'static str {
        self.aliases.first().copied().unwrap_or_default()
    }

    /// All aliases, canonical first.
    #[must_use]
    pub fn aliases(&self) -> &[&'static str] {
        &self.aliases
    }

    /// Settings field written on a match; `None` for terminal entries.
    #[must_use]
    pub fn dest(&self) -> Option<&str> {
        self.dest.as_deref()
    }

    /// How many tokens a match consumes.
    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// How the value token is decoded.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Allowed decoded values, if restricted.
    #[must_use]
    pub fn choices(&self) -> Option<&[Value]> {
        self.choices.as_deref()
    }

    /// Value stored when no value token is given.
    #[must_use]
    pub const fn constant(&self) -> &Value {
        &self.constant
    }

    /// Value or terminal action, if any.
    #[must_use]
    pub const fn coercion(&self) -> Option<Coercion> {
        self.coercion
    }

    /// Placeholder shown in usage and help.
    #[must_use]
    pub const fn metavar(&self) -> Option<&'static str> {
        self.metavar
    }

    /// One-line help text.
    #[must_use]
    pub const fn help(&self) -> &'static str {
        self.help
    }

    /// Returns true for positional entries.
    #[must_use]
    pub fn is_positional(&self) -> bool {
        !self.canonical().starts_with('-')
    }
}

fn default_dest(alias: &str) -> String {
    alias.trim_start_matches('-').replace('-', "_")
}
