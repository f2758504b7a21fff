// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]

//! # unischema
//!
//! Generate one, unified JSON Schema from one or more JSON objects and/or
//! JSON Schemas. Point it at files, a glob pattern, or standard input and
//! get a single schema on standard output that validates all of them.
//!
//! ## Features
//!
//! - **Fragment Seeding**: Merge existing JSON Schema documents as a baseline
//! - **Shape Inference**: Refine the schema from example JSON objects
//! - **Strict Merge Order**: Every fragment merges before any sample,
//!   regardless of argument order
//! - **Deterministic Output**: Sorted keys, sorted type unions, sorted
//!   `required` lists
//! - **Configurable Identifier**: Set or omit the `$schema` keyword
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use unischema::{Result, SchemaUri, Session};
//!
//! fn main() -> Result<()> {
//!     let mut session = Session::new(SchemaUri::Default);
//!
//!     // Seed with a schema fragment, then refine with samples
//!     session.merge_schema_fragment(serde_json::json!({"type": "object"}))?;
//!     session.merge_object_sample(serde_json::json!({"id": 1, "name": "a"}))?;
//!
//!     println!("{}", session.render(Some(2))?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        CLI (clap)                        │
//! │  --schema PATH...   --glob PATTERN   OBJECT... | stdin   │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌────────────────────────────┴─────────────────────────────┐
//! │                      Input Resolver                      │
//! │  schemas (argument order)    objects (explicit + glob)   │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │ fragments first, then samples
//! ┌────────────────────────────┴─────────────────────────────┐
//! │                 Session over SchemaEngine                │
//! │  SchemaBuilder: nodes + strategies → one JSON Schema     │
//! └──────────────────────────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Add docs before 1.0 release

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for unischema
pub mod error;

/// Input resolution: ordering, glob expansion, stdin fallback
pub mod input;

/// The accumulating builder session and the engine contract
pub mod session;

/// Schema inference from JSON fragments and samples
pub mod schema;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

// Re-export commonly used types
pub use input::{resolve_inputs, ObjectSource, ResolvedInputs};
pub use schema::SchemaBuilder;
pub use session::{SchemaEngine, SchemaUri, Session, DEFAULT_URI, NULL_URI};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
