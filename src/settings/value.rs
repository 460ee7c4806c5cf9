//! Dynamic values exchanged between the parser, coercions and [`Settings`].
//!
//! [`Settings`]: super::Settings

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A decoded argument value.
///
/// `Unset` is the explicit "no value" sentinel. It is distinct from every
/// legal value, including `Bool(false)`, `Int(0)` and the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    /// No value (e.g. `min_date` before `--since`, or after `--no-curl`).
    #[default]
    Unset,
    /// Boolean toggle.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Free-form text.
    Text(String),
    /// Ordered sequence of text items.
    List(Vec<String>),
}

impl Value {
    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }

    /// Returns true for the `Unset` sentinel.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the text, if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Builds a `List` from anything yielding string-like items.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => f.write_str("<unset>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Unset, Into::into)
    }
}

/// Error returned when a string is not a member of a closed keyword set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not one of: {expected}")]
pub struct UnknownKeyword {
    /// The rejected input
    pub value: String,
    /// Comma separated list of accepted keywords
    pub expected: String,
}

/// Defines a closed keyword enum with `as_str`, `ALL`, `FromStr` and `Display`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant, )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The command-line keyword for this variant.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyword;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    _ => Err(UnknownKeyword {
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for Value {
            fn from(v: $name) -> Self {
                Self::Text(v.as_str().to_string())
            }
        }
    };
}

keyword_enum! {
    /// Output mode selected with `--mode`.
    pub enum Mode {
        /// Print links to standard output
        Stdout => "stdout",
        /// Build a directory tree of symlinks
        Filesystem => "filesystem",
        /// Write m3u playlists
        M3u => "m3u",
        /// Write m3u playlists for players without extended m3u support
        M3uCompat => "m3ucompat",
        /// Write html pages
        Html => "html",
    }
}

keyword_enum! {
    /// What `--download` fetches.
    pub enum Download {
        /// Media files
        Media => "media",
        /// Subtitle files named after the media
        Subtitles => "subtitles",
        /// Subtitle files with human-readable names
        FriendlySubtitles => "friendly-subtitles",
    }
}
