//! Left-to-right token scanning.

use std::sync::LazyLock;

use regex::Regex;

use crate::coerce::{Coercion, Context, Terminate, builtin};
use crate::schema::{Arity, SchemaEntry, ValueKind};
use crate::settings::{Settings, Value};

use super::grammar::HELP_ALIASES;
use super::{Grammar, ParseError};

/// Result of a successful parse.
#[derive(Debug)]
pub enum Outcome {
    /// Every token was consumed; the populated settings.
    Complete(Settings),
    /// A terminal action (or help) ran; the process should end.
    Terminate(Terminate),
}

/// Negative decimal numbers, which are values rather than flags.
static NEGATIVE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-\d+$|^-\d*\.\d+$").expect("pattern is valid"));

/// Returns true if `token` is shaped like a flag rather than a value.
///
/// `-` alone and negative numbers such as `-5` or `-.5` are values.
/// Words like `-inf` are flags.
#[must_use]
pub fn looks_like_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && !NEGATIVE_NUMBER.is_match(token)
}

/// Returns true for `-abc` style tokens that may bundle short flags.
fn is_short_cluster(token: &str) -> bool {
    token.len() > 2 && token.starts_with('-') && !token.starts_with("--")
}

/// A matched entry and its raw value token, if any.
type Matched<'r> = (&'r SchemaEntry, Option<String>);

/// Splits `--flag=value` into its parts. Short flags are never split.
fn split_inline(token: &str) -> (&str, Option<&str>) {
    if token.starts_with("--") {
        if let Some((flag, value)) = token.split_once('=') {
            return (flag, Some(value));
        }
    }
    (token, None)
}

fn display_name(entry: &SchemaEntry) -> String {
    if entry.is_positional() {
        entry.metavar().unwrap_or_else(|| entry.canonical()).to_string()
    } else {
        entry.aliases().join("/")
    }
}

impl<'r> Grammar<'r> {
    /// Parses `tokens` into `settings`.
    ///
    /// Tokens are consumed exactly once, left to right, and every store
    /// write or terminal action happens in token order. When two entries
    /// share a destination, the later token wins.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] met; `settings` is dropped.
    pub fn parse<I, S>(
        &self,
        tokens: I,
        mut settings: Settings,
        ctx: &mut Context<'_>,
    ) -> Result<Outcome, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let mut positionals = self.positionals.iter().copied();
        let mut flags_ended = false;
        let mut pos = 0;

        while pos < tokens.len() {
            let token = &tokens[pos];
            pos += 1;

            if !flags_ended {
                if token == "--" {
                    flags_ended = true;
                    continue;
                }
                if HELP_ALIASES.contains(&token.as_str()) {
                    self.write_help(ctx)?;
                    return Ok(Outcome::Terminate(Terminate::SUCCESS));
                }
                if looks_like_flag(token) {
                    for (entry, raw) in self.match_flag(token, &tokens, &mut pos)? {
                        if let Some(done) = apply(entry, raw, &mut settings, ctx)? {
                            return Ok(Outcome::Terminate(done));
                        }
                    }
                    continue;
                }
            }

            let entry = positionals
                .next()
                .ok_or_else(|| ParseError::UnrecognizedFlag {
                    token: token.clone(),
                })?;

            if entry.arity() == Arity::Remainder {
                let rest = Value::List(tokens[pos - 1..].to_vec());
                tracing::debug!(argument = entry.canonical(), value = %rest, "Captured remainder");
                store(entry, rest, &mut settings)?;
                break;
            }
            apply(entry, Some(token.clone()), &mut settings, ctx)?;
        }

        if let Some(missing) = positionals.find(|e| e.arity() == Arity::One) {
            return Err(ParseError::MissingValue {
                name: display_name(missing),
            });
        }

        Ok(Outcome::Complete(settings))
    }

    /// Resolves a flag token and consumes its value token, if any.
    ///
    /// A short token that names no flag is read as a cluster: `-qq` is
    /// `-q -q` and `-Q480` is `-Q 480`.
    fn match_flag(
        &self,
        token: &str,
        tokens: &[String],
        pos: &mut usize,
    ) -> Result<Vec<Matched<'r>>, ParseError> {
        let (flag, inline) = split_inline(token);
        if let Some(entry) = self.flag(flag) {
            return take_value(entry, inline, tokens, pos).map(|m| vec![m]);
        }
        if is_short_cluster(token) {
            return self.match_cluster(token, tokens, pos);
        }
        Err(ParseError::UnrecognizedFlag {
            token: token.to_string(),
        })
    }

    /// Splits a short cluster. A flag that takes a value ends the cluster
    /// and takes the rest of the token (after an optional `=`), or the next
    /// token if none is left.
    fn match_cluster(
        &self,
        token: &str,
        tokens: &[String],
        pos: &mut usize,
    ) -> Result<Vec<Matched<'r>>, ParseError> {
        let mut matched = Vec::new();
        let mut rest = &token[1..];

        while let Some(c) = rest.chars().next() {
            let (short, tail) = rest.split_at(c.len_utf8());
            let entry = self
                .flag(&format!("-{short}"))
                .ok_or_else(|| ParseError::UnrecognizedFlag {
                    token: token.to_string(),
                })?;
            rest = tail;

            if entry.arity().takes_value() {
                let inline = (!rest.is_empty()).then(|| rest.strip_prefix('=').unwrap_or(rest));
                matched.push(take_value(entry, inline, tokens, pos)?);
                return Ok(matched);
            }
            matched.push((entry, None));
        }

        Ok(matched)
    }
}

/// Pairs a matched flag with its value: the inline part, the next token,
/// or nothing.
fn take_value<'r>(
    entry: &'r SchemaEntry,
    inline: Option<&str>,
    tokens: &[String],
    pos: &mut usize,
) -> Result<Matched<'r>, ParseError> {
    if !entry.arity().takes_value() {
        return match inline {
            Some(value) => Err(ParseError::UnexpectedValue {
                name: display_name(entry),
                value: value.to_string(),
            }),
            None => Ok((entry, None)),
        };
    }

    if let Some(value) = inline {
        return Ok((entry, Some(value.to_string())));
    }

    let raw = tokens.get(*pos).filter(|t| !looks_like_flag(t)).cloned();
    if raw.is_some() {
        *pos += 1;
    }

    if raw.is_none() && entry.arity() == Arity::One {
        return Err(ParseError::MissingValue {
            name: display_name(entry),
        });
    }
    Ok((entry, raw))
}

/// Applies one matched entry. Returns `Some` when a terminal action ran.
fn apply(
    entry: &SchemaEntry,
    raw: Option<String>,
    settings: &mut Settings,
    ctx: &mut Context<'_>,
) -> Result<Option<Terminate>, ParseError> {
    if let Some(Coercion::Terminal(action)) = entry.coercion() {
        tracing::debug!(argument = entry.canonical(), "Running terminal action");
        return action(ctx)
            .map(Some)
            .map_err(|e| ParseError::coercion(display_name(entry), e));
    }

    let value = match (entry.arity(), raw) {
        (Arity::Count, _) => increment(entry, settings)?,
        (_, Some(token)) => decode(entry, &token, ctx)?,
        (_, None) => entry.constant().clone(),
    };

    tracing::debug!(argument = entry.canonical(), %value, "Matched argument");
    store(entry, value, settings)?;
    Ok(None)
}

/// Decodes, validates and coerces one value token.
fn decode(entry: &SchemaEntry, token: &str, ctx: &Context<'_>) -> Result<Value, ParseError> {
    let value = match entry.kind() {
        ValueKind::Text => Value::from(token),
        ValueKind::Integer => builtin::parse_integer(token)
            .map_err(|e| ParseError::coercion(display_name(entry), e))?,
    };

    if let Some(choices) = entry.choices() {
        if !choices.contains(&value) {
            return Err(ParseError::InvalidChoice {
                name: display_name(entry),
                value: token.to_string(),
                choices: choices
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
    }

    match entry.coercion() {
        Some(Coercion::Value(action)) => {
            action(value, ctx).map_err(|e| ParseError::coercion(display_name(entry), e))
        }
        _ => Ok(value),
    }
}

/// Next count for a counting entry, starting from its stored value.
fn increment(entry: &SchemaEntry, settings: &Settings) -> Result<Value, ParseError> {
    let current = match entry.dest() {
        Some(dest) => settings.get(dest)?,
        None => Value::Unset,
    };
    let count = match current {
        Value::Int(n) => n,
        _ => 0,
    };
    Ok(Value::Int(count.saturating_add(1)))
}

fn store(entry: &SchemaEntry, value: Value, settings: &mut Settings) -> Result<(), ParseError> {
    if let Some(dest) = entry.dest() {
        settings.set(dest, value)?;
    }
    Ok(())
}
