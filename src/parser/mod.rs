//! Activator and parser.
//!
//! [`Grammar::activate`] resolves an ordered activation set against a
//! [`Registry`](crate::schema::Registry) and checks every destination
//! against the settings schema. [`Grammar::parse`] then scans raw tokens
//! left to right:
//!
//! - a token naming an activated flag consumes zero or one value token,
//!   per the entry's [`Arity`](crate::schema::Arity);
//! - any other token binds the next free positional, and a remainder
//!   positional swallows everything after it verbatim;
//! - `--` ends flag matching, `-h`/`--help` prints the listing and ends
//!   the parse;
//! - anything left over is an [`ParseError::UnrecognizedFlag`].
//!
//! Terminal actions end the parse with [`Outcome::Terminate`] instead of
//! exiting the process.

mod error;
mod grammar;
mod help;
mod scan;


pub use error::ParseError;
pub use grammar::{DEFAULT_PROGRAM, Grammar, HELP_ALIASES};
pub use scan::{Outcome, looks_like_flag};
