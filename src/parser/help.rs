//! Usage and help rendering, in activation order.

use std::fmt::Write as _;

use crate::coerce::Context;
use crate::schema::{Arity, SchemaEntry};

use super::grammar::ActiveFlag;
use super::{Grammar, ParseError};

const HELP_COLUMN: usize = 24;

fn metavar(entry: &SchemaEntry) -> String {
    if let Some(metavar) = entry.metavar() {
        return metavar.to_string();
    }
    if let Some(choices) = entry.choices() {
        let names: Vec<String> = choices.iter().map(ToString::to_string).collect();
        return format!("{{{}}}", names.join(","));
    }
    entry
        .dest()
        .unwrap_or_else(|| entry.canonical().trim_start_matches('-'))
        .to_uppercase()
}

fn flag_usage(alias: &str, entry: &SchemaEntry) -> String {
    match entry.arity() {
        Arity::One => format!("{alias} {}", metavar(entry)),
        Arity::OptionalOne => format!("{alias} [{}]", metavar(entry)),
        Arity::Flag | Arity::Count | Arity::Remainder => alias.to_string(),
    }
}

fn positional_usage(entry: &SchemaEntry) -> String {
    let name = entry.metavar().unwrap_or_else(|| entry.canonical());
    match entry.arity() {
        Arity::OptionalOne => format!("[{name}]"),
        Arity::Remainder => format!("[{name} ...]"),
        _ => name.to_string(),
    }
}

fn push_row(out: &mut String, invocation: &str, help: &str) {
    let _ = write!(out, "  {invocation}");
    if invocation.len() + 2 < HELP_COLUMN {
        let _ = writeln!(out, "{:pad$}{help}", "", pad = HELP_COLUMN - invocation.len() - 2);
    } else {
        let _ = writeln!(out, "\n{:pad$}{help}", "", pad = HELP_COLUMN);
    }
}

impl<'r> Grammar<'r> {
    fn live_flags(&self) -> impl Iterator<Item = &ActiveFlag<'r>> {
        self.flags.iter().filter(|f| !f.aliases.is_empty())
    }

    /// One-line usage summary.
    #[must_use]
    pub fn usage(&self) -> String {
        let mut parts = vec![format!("usage: {}", self.program), "[-h]".to_string()];

        for flag in self.live_flags() {
            parts.push(format!("[{}]", flag_usage(flag.aliases[0], flag.entry)));
        }
        for entry in &self.positionals {
            parts.push(positional_usage(entry));
        }

        parts.join(" ")
    }

    /// Full help listing: usage, positionals, then flags.
    #[must_use]
    pub fn help(&self) -> String {
        let mut out = self.usage();
        out.push_str("\n\n");

        if !self.positionals.is_empty() {
            out.push_str("positional arguments:\n");
            for entry in &self.positionals {
                let name = entry.metavar().unwrap_or_else(|| entry.canonical());
                push_row(&mut out, name, entry.help());
            }
            out.push('\n');
        }

        out.push_str("options:\n");
        push_row(&mut out, "-h, --help", "show this help message and exit");
        for flag in self.live_flags() {
            let invocation = flag
                .aliases
                .iter()
                .map(|alias| flag_usage(alias, flag.entry))
                .collect::<Vec<_>>()
                .join(", ");
            push_row(&mut out, &invocation, flag.entry.help());
        }

        out
    }

    pub(super) fn write_help(&self, ctx: &mut Context<'_>) -> Result<(), ParseError> {
        let out = ctx.output();
        out.write_all(self.help().as_bytes())
            .and_then(|()| out.flush())
            .map_err(ParseError::Output)
    }
}
