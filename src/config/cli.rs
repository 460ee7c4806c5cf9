//! Outer command line, parsed with clap.
//!
//! Selects the front-end command and carries its raw arguments through
//! untouched; the schema parser interprets them.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::languages::DEFAULT_TIMEOUT;
use crate::profile::Profile;

/// JW Broadcasting settings front end
///
/// Parses indexer or streamer arguments against the predefined argument
/// table and prints the resulting settings as JSON.
#[derive(Debug, Parser)]
#[command(name = "jwb-args")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Command whose arguments to parse
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with default settings, applied before the arguments
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Timeout in seconds for the language list request
    #[arg(long = "fetch-timeout", value_name = "SECS")]
    pub fetch_timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Front-end commands.
///
/// clap's own help flag is disabled here so `-h` reaches the schema parser,
/// which prints the command's argument listing.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Index media and write output in the chosen mode
    #[command(disable_help_flag = true)]
    Index {
        /// Indexer arguments (see `jwb-args index --help`)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Stream media through a video player
    #[command(disable_help_flag = true)]
    Stream {
        /// Streamer arguments (see `jwb-args stream --help`)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
        args: Vec<String>,
    },
}

impl Command {
    /// The activation set this command uses.
    #[must_use]
    pub const fn profile(&self) -> Profile {
        match self {
            Self::Index { .. } => Profile::Index,
            Self::Stream { .. } => Profile::Stream,
        }
    }

    /// Raw arguments for the schema parser.
    #[must_use]
    pub fn args(&self) -> &[String] {
        match self {
            Self::Index { args } | Self::Stream { args } => args,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Language list timeout, falling back to the default.
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs)
    }
}
