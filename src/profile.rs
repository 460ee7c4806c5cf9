//! Named activation sets.
//!
//! Each front-end command activates its own ordered subset of the
//! predefined arguments. The order is the help order.

use std::fmt;

/// A front-end command and the arguments it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Index the catalogue and write output in the chosen mode.
    Index,
    /// Stream videos through an external player.
    Stream,
}

const INDEX: &[&str] = &[
    "--quiet",
    "--mode",
    "--lang",
    "--languages",
    "--quality",
    "--hard-subtitles",
    "--no-checksum",
    "--free",
    "--no-warning",
    "--category",
    "--exclude",
    "--latest",
    "--since",
    "--limit-rate",
    "--curl-path",
    "--no-curl",
    "--clean-symlinks",
    "--ntfs",
    "--download",
    "work_dir",
];

const STREAM: &[&str] = &[
    "--quiet",
    "--lang",
    "--languages",
    "--quality",
    "--hard-subtitles",
    "--category",
    "--exclude",
    "--latest",
    "--since",
    "--forever",
    "command",
];

impl Profile {
    /// Canonical argument names, in activation order.
    #[must_use]
    pub const fn arguments(self) -> &'static [&'static str] {
        match self {
            Self::Index => INDEX,
            Self::Stream => STREAM,
        }
    }

    /// Program name shown in help.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Index => "jwb-index",
            Self::Stream => "jwb-stream",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Grammar;
    use crate::schema::Registry;

    #[test]
    fn every_profile_activates() {
        let registry = Registry::predefined().unwrap();

        for profile in [Profile::Index, Profile::Stream] {
            assert!(
                Grammar::activate(&registry, profile.arguments()).is_ok(),
                "{profile} should activate"
            );
        }
    }

    #[test]
    fn stream_ends_with_remainder_command() {
        assert_eq!(Profile::Stream.arguments().last(), Some(&"command"));
        assert!(!Profile::Index.arguments().contains(&"command"));
    }

    #[test]
    fn display_is_program_name() {
        assert_eq!(Profile::Index.to_string(), "jwb-index");
        assert_eq!(Profile::Stream.to_string(), "jwb-stream");
    }
}
