//! JWB-Args: schema-driven argument parsing for JW Broadcasting tools
//!
//! A library for parsing command lines against a table of predefined
//! arguments and writing the results into a closed-world settings store.
//! Front ends activate the subset of arguments they accept; coercions may
//! validate values against the remote language list.

pub mod coerce;
pub mod config;
pub mod languages;
pub mod parser;
pub mod profile;
pub mod schema;
pub mod settings;

#[cfg(test)]
mod test_fixtures;
