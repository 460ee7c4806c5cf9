//! Coercion layer.
//!
//! A coercion turns a decoded argument value into the value stored in
//! settings ([`Coercion::Value`]), or produces output and ends the parse
//! ([`Coercion::Terminal`]). Ending the parse is reported as data
//! ([`Terminate`]) so callers decide when the process exits.
//!
//! [`builtin`] holds the coercions used by the predefined schema table.

mod action;
pub mod builtin;
mod error;


pub use action::{Coercion, Context, Terminate, TerminalFn, ValueFn};
pub use error::CoercionError;
