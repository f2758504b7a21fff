//! Schema inference engine
//!
//! Accumulates JSON Schema fragments and JSON object samples into one
//! unified schema document.
//!
//! # Features
//!
//! - **Type Inference**: Infers types from JSON samples
//! - **Fragment Seeding**: Merges user-supplied JSON Schema fragments
//! - **Type Unions**: Collapses mixed scalars into sorted type lists
//! - **Array Item Merging**: One items schema across all seen elements
//! - **Nested Object Support**: Handles nested objects recursively

mod builder;
mod node;
mod strategy;

pub use builder::SchemaBuilder;
pub use node::SchemaNode;
