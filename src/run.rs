//! Application execution logic.
//!
//! This module builds the registry, loads the starting settings, parses the
//! selected command's arguments and writes the result.

use std::io::Write;

use thiserror::Error;

use jwb_args::coerce::{Context, Terminate};
use jwb_args::config::{Cli, ConfigError, load_settings};
use jwb_args::languages::LanguageSource;
use jwb_args::parser::{Grammar, Outcome, ParseError};
use jwb_args::schema::{Registry, RegistryError};
use jwb_args::settings::Settings;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The settings file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The predefined argument table is inconsistent.
    #[error("Invalid argument table: {0}")]
    Registry(#[from] RegistryError),

    /// The command line was rejected.
    #[error("{source}")]
    Parse {
        /// Usage line of the command that failed
        usage: String,
        /// Underlying parse error
        #[source]
        source: ParseError,
    },

    /// The settings could not be written.
    #[error("Failed to write settings: {0}")]
    Output(#[source] std::io::Error),
}

impl RunError {
    /// Returns true if the language list could not be fetched.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Parse {
                source: ParseError::Network { .. },
                ..
            }
        )
    }

    /// Returns true for errors caused by the command line itself.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        match self {
            Self::Parse { source, .. } => source.is_usage(),
            _ => false,
        }
    }
}

/// Parses the selected command's arguments and writes the settings.
///
/// On a complete parse the settings go to `out` as pretty JSON. Help and
/// terminal actions write their own output to `out` and return their
/// exit status.
///
/// # Errors
///
/// Returns an error if the settings file, the argument table, the command
/// line or the output fails.
pub fn execute(
    cli: &Cli,
    languages: &dyn LanguageSource,
    out: &mut dyn Write,
) -> Result<Terminate, RunError> {
    let registry = Registry::predefined()?;
    let settings = load_settings(cli.config.as_deref())?;

    let profile = cli.command.profile();
    let grammar = Grammar::activate(&registry, profile.arguments())
        .map_err(|source| parse_error(String::new(), source))?
        .with_program(profile.program());

    tracing::debug!(%profile, args = ?cli.command.args(), "Parsing arguments");

    let outcome = {
        let mut ctx = Context::new(languages, out);
        grammar
            .parse(cli.command.args().iter().cloned(), settings, &mut ctx)
            .map_err(|source| parse_error(grammar.usage(), source))?
    };

    match outcome {
        Outcome::Complete(settings) => {
            tracing::info!("{settings}");
            write_settings(out, &settings)?;
            Ok(Terminate::SUCCESS)
        }
        Outcome::Terminate(terminate) => {
            tracing::debug!(exit_code = terminate.exit_code, "Terminated by argument");
            Ok(terminate)
        }
    }
}

fn parse_error(usage: String, source: ParseError) -> RunError {
    RunError::Parse { usage, source }
}

fn write_settings(out: &mut dyn Write, settings: &Settings) -> Result<(), RunError> {
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| RunError::Output(std::io::Error::other(e)))?;
    writeln!(out, "{json}")
        .and_then(|()| out.flush())
        .map_err(RunError::Output)
}
