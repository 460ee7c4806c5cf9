//! Tests for outer CLI argument parsing.

use std::path::Path;
use std::time::Duration;

use super::cli::{Cli, Command};
use crate::profile::Profile;

mod parsing {
    use super::*;

    #[test]
    fn parse_index_command() {
        let cli = Cli::parse_from_iter(["jwb-args", "index", "--quiet", "out"]);

        assert!(matches!(cli.command, Command::Index { .. }));
        assert_eq!(cli.command.args(), ["--quiet", "out"]);
        assert_eq!(cli.command.profile(), Profile::Index);
    }

    #[test]
    fn parse_stream_command() {
        let cli = Cli::parse_from_iter(["jwb-args", "stream", "--forever", "mpv", "--fs"]);

        assert_eq!(cli.command.profile(), Profile::Stream);
        assert_eq!(cli.command.args(), ["--forever", "mpv", "--fs"]);
    }

    #[test]
    fn command_without_args_is_empty() {
        let cli = Cli::parse_from_iter(["jwb-args", "index"]);

        assert!(cli.command.args().is_empty());
    }

    #[test]
    fn help_flag_is_passed_through() {
        let cli = Cli::parse_from_iter(["jwb-args", "index", "-h"]);

        assert_eq!(cli.command.args(), ["-h"]);
    }

    #[test]
    fn short_flags_are_passed_through() {
        let cli = Cli::parse_from_iter(["jwb-args", "index", "-q", "-l", "S", "-c", "x"]);

        assert_eq!(cli.command.args(), ["-q", "-l", "S", "-c", "x"]);
    }

    #[test]
    fn double_dash_is_kept_with_args() {
        let cli = Cli::parse_from_iter(["jwb-args", "stream", "--", "-x"]);

        assert!(cli.command.args().ends_with(&["-x".to_string()]));
    }
}

mod global_options {
    use super::*;

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from_iter(["jwb-args", "--config", "jwb.toml", "index"]);

        assert_eq!(cli.config.as_deref(), Some(Path::new("jwb.toml")));
    }

    #[test]
    fn parse_verbose_short_and_long() {
        let short = Cli::parse_from_iter(["jwb-args", "-v", "index"]);
        assert!(short.verbose);

        let long = Cli::parse_from_iter(["jwb-args", "--verbose", "index"]);
        assert!(long.verbose);

        let none = Cli::parse_from_iter(["jwb-args", "index"]);
        assert!(!none.verbose);
    }

    #[test]
    fn fetch_timeout_defaults_to_thirty_seconds() {
        let cli = Cli::parse_from_iter(["jwb-args", "index"]);

        assert_eq!(cli.fetch_timeout, None);
        assert_eq!(cli.fetch_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn fetch_timeout_is_configurable() {
        let cli = Cli::parse_from_iter(["jwb-args", "--fetch-timeout", "5", "index"]);

        assert_eq!(cli.fetch_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn missing_command_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from(["jwb-args"]);

        assert!(result.is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        let result = <Cli as clap::Parser>::try_parse_from(["jwb-args", "download"]);

        assert!(result.is_err());
    }
}
