//! CLI module
//!
//! Command-line interface for building a unified schema from JSON inputs.
//!
//! # Arguments
//!
//! - `-s, --schema PATH` - Schema fragment files, merged before any object
//! - `-$, --schema-uri URI` - `$schema` value, `NULL` omits the keyword
//! - `--glob PATTERN` - Object files matched by pattern
//! - `-i, --indent SPACES` - Pretty-print the output
//! - `OBJECT...` - Object files, stdin when none and no glob given

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;

#[cfg(test)]
mod tests;
