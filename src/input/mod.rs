//! Input resolution module
//!
//! Turns command-line inputs into ordered schema and object source lists
//! and materializes each one as parsed JSON.
//!
//! # Overview
//!
//! The input module provides:
//! - `ObjectSource` - Where one object sample is read from
//! - `ResolvedInputs` - The ordered schema and object source lists
//! - `resolve_inputs` - Ordering, glob expansion, stdin fallback
//! - `read_json_file` / `read_object_source` - Read fully, then parse

mod resolver;
mod types;

pub use resolver::{read_json_file, read_object_source, resolve_inputs};
pub use types::{ObjectSource, ResolvedInputs};

#[cfg(test)]
mod tests;
