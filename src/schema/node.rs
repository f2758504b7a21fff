//! Schema tree nodes
//!
//! A node is one position in the accumulated schema: the document root, a
//! property value, an array's items. It keeps one active strategy per
//! value kind seen at that position and combines their renderings.

use crate::error::{Error, Result};
use crate::schema::strategy::Strategy;
use serde_json::{Map, Value};

/// Object form of a JSON value
pub(crate) type JsonObject = Map<String, Value>;

/// One position in the schema tree
#[derive(Debug, Clone, Default)]
pub struct SchemaNode {
    strategies: Vec<Strategy>,
}

impl SchemaNode {
    /// Create an empty node
    pub fn new() -> Self {
        Self::default()
    }

    /// True until a fragment or sample has merged into this node
    pub(crate) fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Merge a schema fragment into this node
    ///
    /// An `anyOf` fragment flattens into one merge per branch; a `type`
    /// list splits into one merge per listed type.
    pub fn add_schema(&mut self, schema: &JsonObject) -> Result<()> {
        if let Some(branches) = schema.get("anyOf") {
            let branches = branches
                .as_array()
                .ok_or_else(|| Error::invalid_schema("\"anyOf\" must be an array"))?;
            for branch in branches {
                let branch = branch.as_object().ok_or_else(|| {
                    Error::invalid_schema("\"anyOf\" entries must be JSON objects")
                })?;
                self.add_schema(branch)?;
            }
            return Ok(());
        }

        match schema.get("type") {
            Some(Value::Array(types)) => {
                for entry in types {
                    let Value::String(type_name) = entry else {
                        return Err(Error::invalid_schema(format!(
                            "\"type\" entries must be strings, got {}",
                            json_kind(entry)
                        )));
                    };
                    let mut split = schema.clone();
                    split.insert("type".to_string(), Value::String(type_name.clone()));
                    self.add_single_schema(&split)?;
                }
                Ok(())
            }
            _ => self.add_single_schema(schema),
        }
    }

    /// Merge one object sample into this node
    pub fn add_object(&mut self, sample: &Value) -> Result<()> {
        let index = match self.strategies.iter().position(|s| s.matches_value(sample)) {
            Some(index) => index,
            None => self.activate(Strategy::for_value(sample))?,
        };
        self.strategies[index].add_object(sample)
    }

    /// Render this node's accumulated state
    ///
    /// Strategies that render as a bare type collapse into one entry with
    /// a sorted type list; anything else stays a separate entry. One entry
    /// renders as itself, several under `anyOf`, none as `{}`.
    pub fn to_schema(&self) -> JsonObject {
        let mut types: Vec<String> = Vec::new();
        let mut others: Vec<JsonObject> = Vec::new();

        for strategy in &self.strategies {
            let schema = strategy.to_schema();
            match bare_type(&schema) {
                Some(type_name) => types.push(type_name.to_string()),
                None => others.push(schema),
            }
        }

        types.sort();

        let mut entries: Vec<JsonObject> = Vec::new();
        if !types.is_empty() {
            let value = if types.len() == 1 {
                Value::String(types.remove(0))
            } else {
                Value::Array(types.into_iter().map(Value::String).collect())
            };
            let mut schema = JsonObject::new();
            schema.insert("type".to_string(), value);
            entries.push(schema);
        }
        entries.extend(others);

        match entries.len() {
            0 => JsonObject::new(),
            1 => entries.remove(0),
            _ => {
                let branches = entries.into_iter().map(Value::Object).collect();
                let mut schema = JsonObject::new();
                schema.insert("anyOf".to_string(), Value::Array(branches));
                schema
            }
        }
    }

    /// Merge one subschema carrying at most a single declared type
    ///
    /// Untyped subschemas go to the typeless placeholder, which stores
    /// their keywords verbatim until the next strategy activation takes
    /// them over.
    fn add_single_schema(&mut self, schema: &JsonObject) -> Result<()> {
        let index = match self.strategies.iter().position(|s| s.matches_schema(schema)) {
            Some(index) => index,
            None => self.activate(Strategy::for_schema(schema)?)?,
        };
        self.strategies[index].add_schema(schema)
    }

    /// Append a newly activated strategy, folding a trailing typeless
    /// placeholder's keywords into it first
    fn activate(&mut self, mut strategy: Strategy) -> Result<usize> {
        if let Some(extra) = self.take_typeless() {
            strategy.add_schema(&extra)?;
        }
        self.strategies.push(strategy);
        Ok(self.strategies.len() - 1)
    }

    /// Remove and return the trailing typeless placeholder's keywords
    fn take_typeless(&mut self) -> Option<JsonObject> {
        if matches!(self.strategies.last(), Some(Strategy::Typeless(_))) {
            if let Some(Strategy::Typeless(typeless)) = self.strategies.pop() {
                return Some(typeless.into_extra());
            }
        }
        None
    }
}

/// The type name when a schema is exactly `{"type": <string>}`
fn bare_type(schema: &JsonObject) -> Option<&str> {
    if schema.len() == 1 {
        schema.get("type").and_then(Value::as_str)
    } else {
        None
    }
}

/// Human name of a JSON value's kind, for error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
