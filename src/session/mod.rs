//! Builder session module
//!
//! Orchestrates one schema-building run: every schema fragment merges
//! before any object sample, then the accumulated state renders once.
//!
//! # Overview
//!
//! The session module provides:
//! - `SchemaUri` - Configured `$schema` identifier policy
//! - `SchemaEngine` - Contract the orchestration expects from an engine
//! - `Session` - The single accumulating run driving an engine

mod types;

pub use types::{SchemaEngine, SchemaUri, DEFAULT_URI, NULL_URI};

use crate::error::Result;
use crate::input::{read_json_file, read_object_source, ResolvedInputs};
use crate::schema::SchemaBuilder;
use serde_json::Value;
use tracing::debug;

/// One accumulating schema-building run
///
/// Wraps one engine. Inputs arrive as two ordered lists and merge in two
/// fixed passes, fragments first, so command-line argument positions
/// never decide merge order.
#[derive(Debug)]
pub struct Session<E = SchemaBuilder> {
    engine: E,
}

impl Session<SchemaBuilder> {
    /// Create a session around the built-in engine with the given
    /// identifier policy
    pub fn new(uri: SchemaUri) -> Self {
        Self::with_engine(SchemaBuilder::new(uri))
    }
}

impl<E: SchemaEngine> Session<E> {
    /// Create a session around any engine
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Merge one parsed JSON Schema fragment
    pub fn merge_schema_fragment(&mut self, fragment: Value) -> Result<()> {
        self.engine.add_schema(fragment)
    }

    /// Merge one parsed JSON object sample
    pub fn merge_object_sample(&mut self, sample: Value) -> Result<()> {
        self.engine.add_object(sample)
    }

    /// Merge every resolved input, all schema fragments strictly before
    /// any object sample
    ///
    /// Each source is read fully and closed before its merge. The first
    /// failure aborts the run with nothing rendered.
    pub fn merge_inputs(&mut self, inputs: &ResolvedInputs) -> Result<()> {
        debug!(
            schemas = inputs.schemas.len(),
            objects = inputs.objects.len(),
            "merging resolved inputs"
        );

        for path in &inputs.schemas {
            let fragment = read_json_file(path)?;
            self.merge_schema_fragment(fragment)?;
        }

        for source in &inputs.objects {
            let sample = read_object_source(source)?;
            self.merge_object_sample(sample)?;
        }

        Ok(())
    }

    /// Render the accumulated schema as JSON text
    ///
    /// Compact without an indent width, pretty-printed with one. Does not
    /// change accumulated state; repeated calls render identically.
    pub fn render(&self, indent: Option<usize>) -> Result<String> {
        self.engine.to_json(indent)
    }
}
