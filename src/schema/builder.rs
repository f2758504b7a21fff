//! The accumulating schema builder

use crate::error::{Error, Result};
use crate::schema::node::{json_kind, SchemaNode};
use crate::session::{SchemaEngine, SchemaUri, DEFAULT_URI};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// Accumulates schema fragments and object samples into one schema
///
/// Fragments seed explicit structure, samples refine it by inference, and
/// the result renders as a single JSON Schema document. Merging is
/// order-insensitive within a kind but fragments are expected first; the
/// session layer enforces that ordering.
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    uri: SchemaUri,
    detected_uri: Option<String>,
    root: SchemaNode,
}

impl SchemaBuilder {
    /// Create a builder with the given identifier policy
    pub fn new(uri: SchemaUri) -> Self {
        Self {
            uri,
            detected_uri: None,
            root: SchemaNode::new(),
        }
    }

    /// Merge one JSON Schema fragment
    ///
    /// The fragment must be a JSON object. A `$schema` string inside it is
    /// recorded (the first fragment's value wins) and stripped before the
    /// merge.
    pub fn add_schema(&mut self, fragment: Value) -> Result<()> {
        let mut fragment = match fragment {
            Value::Object(map) => map,
            other => {
                return Err(Error::invalid_schema(format!(
                    "schema fragment must be a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        if let Some(uri) = fragment.remove("$schema") {
            let Value::String(uri) = uri else {
                return Err(Error::invalid_schema(format!(
                    "\"$schema\" must be a string, got {}",
                    json_kind(&uri)
                )));
            };
            if self.detected_uri.is_none() {
                self.detected_uri = Some(uri);
            }
        }

        self.root.add_schema(&fragment)
    }

    /// Merge one object sample, inferring its shape
    pub fn add_object(&mut self, sample: &Value) -> Result<()> {
        self.root.add_object(sample)
    }

    /// Render the accumulated state as a JSON value
    pub fn to_schema(&self) -> Value {
        let mut schema = Map::new();
        if let Some(uri) = self.schema_uri() {
            schema.insert("$schema".to_string(), Value::String(uri.to_string()));
        }
        schema.extend(self.root.to_schema());
        Value::Object(schema)
    }

    /// Render the accumulated state as JSON text
    ///
    /// Compact without an indent width, pretty-printed with one.
    pub fn to_json(&self, indent: Option<usize>) -> Result<String> {
        let schema = self.to_schema();
        match indent {
            None => Ok(serde_json::to_string(&schema)?),
            Some(width) => {
                let indent = " ".repeat(width);
                let formatter = PrettyFormatter::with_indent(indent.as_bytes());
                let mut buf = Vec::new();
                let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
                schema.serialize(&mut serializer)?;
                Ok(String::from_utf8(buf).expect("serialized JSON is valid UTF-8"))
            }
        }
    }

    /// The identifier the output will carry, if any
    fn schema_uri(&self) -> Option<&str> {
        match &self.uri {
            SchemaUri::Explicit(uri) => Some(uri),
            SchemaUri::Omit => None,
            SchemaUri::Default => Some(self.detected_uri.as_deref().unwrap_or(DEFAULT_URI)),
        }
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new(SchemaUri::Default)
    }
}

impl SchemaEngine for SchemaBuilder {
    fn add_schema(&mut self, fragment: Value) -> Result<()> {
        SchemaBuilder::add_schema(self, fragment)
    }

    fn add_object(&mut self, sample: Value) -> Result<()> {
        SchemaBuilder::add_object(self, &sample)
    }

    fn to_json(&self, indent: Option<usize>) -> Result<String> {
        SchemaBuilder::to_json(self, indent)
    }
}
