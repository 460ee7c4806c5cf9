//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error reporting
//! that support the main entry point.

use jwb_args::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - unreadable or invalid settings file.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Usage error (exit code 2) - rejected command line.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn usage_error() -> ExitCode {
        ExitCode::from(2)
    }

    /// Network error (exit code 3) - language list could not be fetched.
    pub fn network_error() -> ExitCode {
        ExitCode::from(3)
    }
}

/// Prints an error, with usage and hints where they help.
pub fn report(error: &RunError) {
    if let RunError::Parse { usage, .. } = error {
        if !usage.is_empty() {
            eprintln!("{usage}");
        }
    }
    eprintln!("error: {error}");
    print_hint(error);
}

/// Maps an error to the process exit code.
pub fn exit_code_for(error: &RunError) -> std::process::ExitCode {
    if error.is_network() {
        exit_code::network_error()
    } else if error.is_usage() {
        exit_code::usage_error()
    } else {
        exit_code::CONFIG_ERROR
    }
}

/// Prints helpful hints for common errors.
fn print_hint(error: &RunError) {
    match error {
        RunError::Config(ConfigError::Setting { .. }) => {
            eprintln!("\nConfig keys are settings field names, e.g. `lang = \"E\"`.");
        }
        RunError::Parse { .. } if error.is_network() => {
            eprintln!("\nCheck the connection or raise --fetch-timeout.");
        }
        RunError::Parse { .. } if error.is_usage() => {
            eprintln!("\nRun with -h to list the accepted arguments.");
        }
        _ => {}
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so stdout carries only the settings.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
