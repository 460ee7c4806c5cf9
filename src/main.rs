//! JWB-Args: schema-driven argument parsing for JW Broadcasting tools
//!
//! Entry point for the jwb-args application.

use std::process::ExitCode;

use jwb_args::config::Cli;
use jwb_args::languages::{RemoteLanguages, ReqwestClient};

mod app;
mod run;

use app::{exit_code, exit_code_for, report, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    let languages = match RemoteLanguages::new(ReqwestClient::new()) {
        Ok(source) => source.with_timeout(cli.fetch_timeout()),
        Err(e) => {
            eprintln!("error: {e}");
            return exit_code::network_error();
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run::execute(&cli, &languages, &mut out) {
        Ok(terminate) if terminate.exit_code == 0 => exit_code::SUCCESS,
        Ok(terminate) => ExitCode::from(terminate.exit_code),
        Err(e) => {
            report(&e);
            exit_code_for(&e)
        }
    }
}
