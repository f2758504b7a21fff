//! Per-kind merge strategies
//!
//! Each active strategy accumulates everything seen for one JSON value
//! kind at one node. Keywords a strategy does not consume are preserved
//! verbatim, first value wins.

use crate::error::{Error, Result};
use crate::schema::node::{json_kind, JsonObject, SchemaNode};
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

// ============================================================================
// Strategy
// ============================================================================

/// Merge state for one value kind at one node
#[derive(Debug, Clone)]
pub(crate) enum Strategy {
    /// Fragments with no `type` keyword, pending a typed strategy
    Typeless(TypelessStrategy),
    /// Null, boolean, and string values
    Scalar(ScalarStrategy),
    /// Integer and float values
    Number(NumberStrategy),
    /// Arrays, with one merged items node
    List(ListStrategy),
    /// Objects, with per-property nodes and required intersection
    Object(ObjectStrategy),
}

impl Strategy {
    /// Strategy for a subschema, keyed on its `type` keyword
    ///
    /// No `type` keyword activates the typeless placeholder; a declared
    /// type must be a recognized type name.
    pub(crate) fn for_schema(schema: &JsonObject) -> Result<Self> {
        match schema.get("type") {
            None => Ok(Self::Typeless(TypelessStrategy::default())),
            Some(Value::String(type_name)) => Self::for_type(type_name).ok_or_else(|| {
                Error::invalid_schema(format!("unrecognized \"type\" value: {type_name:?}"))
            }),
            Some(other) => Err(Error::invalid_schema(format!(
                "\"type\" must be a string or an array of strings, got {}",
                json_kind(other)
            ))),
        }
    }

    /// Strategy for a declared `type` name, `None` when unrecognized
    fn for_type(type_name: &str) -> Option<Self> {
        match type_name {
            "null" => Some(Self::Scalar(ScalarStrategy::new(ScalarKind::Null))),
            "boolean" => Some(Self::Scalar(ScalarStrategy::new(ScalarKind::Boolean))),
            "string" => Some(Self::Scalar(ScalarStrategy::new(ScalarKind::String))),
            "integer" | "number" => Some(Self::Number(NumberStrategy::default())),
            "array" => Some(Self::List(ListStrategy::default())),
            "object" => Some(Self::Object(ObjectStrategy::default())),
            _ => None,
        }
    }

    /// Strategy for a sample value's kind
    pub(crate) fn for_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Scalar(ScalarStrategy::new(ScalarKind::Null)),
            Value::Bool(_) => Self::Scalar(ScalarStrategy::new(ScalarKind::Boolean)),
            Value::String(_) => Self::Scalar(ScalarStrategy::new(ScalarKind::String)),
            Value::Number(_) => Self::Number(NumberStrategy::default()),
            Value::Array(_) => Self::List(ListStrategy::default()),
            Value::Object(_) => Self::Object(ObjectStrategy::default()),
        }
    }

    /// Whether this strategy covers a subschema's declared type
    ///
    /// The typeless placeholder covers exactly the subschemas with no
    /// `type` keyword.
    pub(crate) fn matches_schema(&self, schema: &JsonObject) -> bool {
        match self {
            Self::Typeless(_) => !schema.contains_key("type"),
            _ => schema
                .get("type")
                .and_then(Value::as_str)
                .is_some_and(|type_name| self.matches_type(type_name)),
        }
    }

    /// Whether this strategy covers a declared `type` name
    fn matches_type(&self, type_name: &str) -> bool {
        match self {
            Self::Typeless(_) => false,
            Self::Scalar(scalar) => scalar.kind.type_name() == type_name,
            Self::Number(_) => matches!(type_name, "integer" | "number"),
            Self::List(_) => type_name == "array",
            Self::Object(_) => type_name == "object",
        }
    }

    /// Whether this strategy covers a sample value's kind
    pub(crate) fn matches_value(&self, value: &Value) -> bool {
        match self {
            Self::Typeless(_) => false,
            Self::Scalar(scalar) => scalar.kind.matches_value(value),
            Self::Number(_) => matches!(value, Value::Number(_)),
            Self::List(_) => matches!(value, Value::Array(_)),
            Self::Object(_) => matches!(value, Value::Object(_)),
        }
    }

    /// Merge a subschema this strategy matched (or a typeless one)
    pub(crate) fn add_schema(&mut self, schema: &JsonObject) -> Result<()> {
        match self {
            Self::Typeless(typeless) => {
                typeless.add_schema(schema);
                Ok(())
            }
            Self::Scalar(scalar) => {
                scalar.add_schema(schema);
                Ok(())
            }
            Self::Number(number) => {
                number.add_schema(schema);
                Ok(())
            }
            Self::List(list) => list.add_schema(schema),
            Self::Object(object) => object.add_schema(schema),
        }
    }

    /// Merge a sample value this strategy matched
    pub(crate) fn add_object(&mut self, value: &Value) -> Result<()> {
        match self {
            Self::Typeless(_) | Self::Scalar(_) => Ok(()),
            Self::Number(number) => {
                number.add_object(value);
                Ok(())
            }
            Self::List(list) => list.add_object(value),
            Self::Object(object) => object.add_object(value),
        }
    }

    /// Render this strategy's accumulated state
    pub(crate) fn to_schema(&self) -> JsonObject {
        match self {
            Self::Typeless(typeless) => typeless.to_schema(),
            Self::Scalar(scalar) => scalar.to_schema(),
            Self::Number(number) => number.to_schema(),
            Self::List(list) => list.to_schema(),
            Self::Object(object) => object.to_schema(),
        }
    }
}

/// Preserve keywords the strategy does not consume, first value wins
fn merge_extra_keywords(extra: &mut JsonObject, schema: &JsonObject, consumed: &[&str]) {
    for (keyword, value) in schema {
        if consumed.contains(&keyword.as_str()) {
            continue;
        }
        match extra.get(keyword) {
            None => {
                extra.insert(keyword.clone(), value.clone());
            }
            Some(existing) if existing != value => {
                warn!(keyword, "conflicting values for schema keyword, keeping the first");
            }
            Some(_) => {}
        }
    }
}

// ============================================================================
// Typeless
// ============================================================================

/// Holds keywords from fragments that declare no type
///
/// Trails the typed strategies at a node; the next strategy to activate
/// takes over its keywords.
#[derive(Debug, Clone, Default)]
pub(crate) struct TypelessStrategy {
    extra: JsonObject,
}

impl TypelessStrategy {
    fn add_schema(&mut self, schema: &JsonObject) {
        merge_extra_keywords(&mut self.extra, schema, &["type"]);
    }

    fn to_schema(&self) -> JsonObject {
        self.extra.clone()
    }

    /// Hand the held keywords to the strategy replacing this placeholder
    pub(crate) fn into_extra(self) -> JsonObject {
        self.extra
    }
}

// ============================================================================
// Scalars
// ============================================================================

/// The scalar kinds that carry no merge state beyond their type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScalarKind {
    Null,
    Boolean,
    String,
}

impl ScalarKind {
    fn type_name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }

    fn matches_value(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Null, Value::Null)
                | (Self::Boolean, Value::Bool(_))
                | (Self::String, Value::String(_))
        )
    }
}

/// Merge state for null, boolean, and string values
#[derive(Debug, Clone)]
pub(crate) struct ScalarStrategy {
    kind: ScalarKind,
    extra: JsonObject,
}

impl ScalarStrategy {
    fn new(kind: ScalarKind) -> Self {
        Self {
            kind,
            extra: JsonObject::new(),
        }
    }

    fn add_schema(&mut self, schema: &JsonObject) {
        merge_extra_keywords(&mut self.extra, schema, &["type"]);
    }

    fn to_schema(&self) -> JsonObject {
        let mut schema = self.extra.clone();
        schema.insert(
            "type".to_string(),
            Value::String(self.kind.type_name().to_string()),
        );
        schema
    }
}

// ============================================================================
// Numbers
// ============================================================================

/// Merge state for numeric values
///
/// Renders `integer` until a float sample or a `number` fragment widens it.
#[derive(Debug, Clone, Default)]
pub(crate) struct NumberStrategy {
    float_seen: bool,
    extra: JsonObject,
}

impl NumberStrategy {
    fn add_schema(&mut self, schema: &JsonObject) {
        if schema.get("type").and_then(Value::as_str) == Some("number") {
            self.float_seen = true;
        }
        merge_extra_keywords(&mut self.extra, schema, &["type"]);
    }

    fn add_object(&mut self, value: &Value) {
        if let Value::Number(number) = value {
            if !number.is_i64() && !number.is_u64() {
                self.float_seen = true;
            }
        }
    }

    fn to_schema(&self) -> JsonObject {
        let type_name = if self.float_seen { "number" } else { "integer" };
        let mut schema = self.extra.clone();
        schema.insert("type".to_string(), Value::String(type_name.to_string()));
        schema
    }
}

// ============================================================================
// Lists
// ============================================================================

/// Merge state for arrays
///
/// Every item of every sample and every `items` subschema merges into one
/// child node.
#[derive(Debug, Clone, Default)]
pub(crate) struct ListStrategy {
    items: SchemaNode,
    extra: JsonObject,
}

impl ListStrategy {
    fn add_schema(&mut self, schema: &JsonObject) -> Result<()> {
        match schema.get("items") {
            None => {}
            Some(Value::Object(items)) => self.items.add_schema(items)?,
            Some(Value::Array(entries)) => {
                for entry in entries {
                    let entry = entry.as_object().ok_or_else(|| {
                        Error::invalid_schema("\"items\" entries must be JSON objects")
                    })?;
                    self.items.add_schema(entry)?;
                }
            }
            Some(other) => {
                return Err(Error::invalid_schema(format!(
                    "\"items\" must be an object or an array of objects, got {}",
                    json_kind(other)
                )))
            }
        }

        merge_extra_keywords(&mut self.extra, schema, &["type", "items"]);
        Ok(())
    }

    fn add_object(&mut self, value: &Value) -> Result<()> {
        if let Value::Array(items) = value {
            for item in items {
                self.items.add_object(item)?;
            }
        }
        Ok(())
    }

    fn to_schema(&self) -> JsonObject {
        let mut schema = self.extra.clone();
        schema.insert("type".to_string(), Value::String("array".to_string()));

        if !self.items.is_empty() {
            schema.insert("items".to_string(), Value::Object(self.items.to_schema()));
        }
        schema
    }
}

// ============================================================================
// Objects
// ============================================================================

/// A compiled `patternProperties` entry with its own child node
#[derive(Debug, Clone)]
struct PatternProperty {
    regex: Regex,
    node: SchemaNode,
}

/// Merge state for objects
///
/// Declared properties each get a child node; sample keys not declared as
/// properties route to the first matching `patternProperties` entry.
/// `required` is the intersection across all object samples and all
/// fragments that declare it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ObjectStrategy {
    properties: BTreeMap<String, SchemaNode>,
    pattern_properties: Vec<PatternProperty>,
    required: Option<BTreeSet<String>>,
    // A fragment that declares `"required": []` keeps the keyword in the
    // output even though the intersection is empty
    include_empty_required: bool,
    extra: JsonObject,
}

impl ObjectStrategy {
    fn add_schema(&mut self, schema: &JsonObject) -> Result<()> {
        if let Some(properties) = schema.get("properties") {
            let properties = properties
                .as_object()
                .ok_or_else(|| Error::invalid_schema("\"properties\" must be a JSON object"))?;
            for (name, subschema) in properties {
                let subschema = subschema.as_object().ok_or_else(|| {
                    Error::invalid_schema(format!(
                        "property {name:?} must map to a JSON object"
                    ))
                })?;
                self.properties
                    .entry(name.clone())
                    .or_default()
                    .add_schema(subschema)?;
            }
        }

        if let Some(patterns) = schema.get("patternProperties") {
            let patterns = patterns.as_object().ok_or_else(|| {
                Error::invalid_schema("\"patternProperties\" must be a JSON object")
            })?;
            for (pattern, subschema) in patterns {
                let subschema = subschema.as_object().ok_or_else(|| {
                    Error::invalid_schema(format!(
                        "pattern {pattern:?} must map to a JSON object"
                    ))
                })?;
                self.pattern_node(pattern)?.add_schema(subschema)?;
            }
        }

        if let Some(required) = schema.get("required") {
            let required = required.as_array().ok_or_else(|| {
                Error::invalid_schema("\"required\" must be an array of strings")
            })?;
            let mut names = BTreeSet::new();
            for name in required {
                let name = name
                    .as_str()
                    .ok_or_else(|| Error::invalid_schema("\"required\" entries must be strings"))?;
                names.insert(name.to_string());
            }
            if names.is_empty() {
                self.include_empty_required = true;
            }
            self.intersect_required(names);
        }

        merge_extra_keywords(
            &mut self.extra,
            schema,
            &["type", "properties", "patternProperties", "required"],
        );
        Ok(())
    }

    fn add_object(&mut self, value: &Value) -> Result<()> {
        let Value::Object(object) = value else {
            return Ok(());
        };

        let mut seen = BTreeSet::new();
        for (name, item) in object {
            if !self.properties.contains_key(name) {
                if let Some(node) = self.matching_pattern_node(name) {
                    node.add_object(item)?;
                    continue;
                }
            }
            seen.insert(name.clone());
            self.properties
                .entry(name.clone())
                .or_default()
                .add_object(item)?;
        }
        self.intersect_required(seen);
        Ok(())
    }

    fn to_schema(&self) -> JsonObject {
        let mut schema = self.extra.clone();
        schema.insert("type".to_string(), Value::String("object".to_string()));

        if !self.properties.is_empty() {
            let mut properties = JsonObject::new();
            for (name, node) in &self.properties {
                properties.insert(name.clone(), Value::Object(node.to_schema()));
            }
            schema.insert("properties".to_string(), Value::Object(properties));
        }

        if !self.pattern_properties.is_empty() {
            let mut patterns = JsonObject::new();
            for property in &self.pattern_properties {
                patterns.insert(
                    property.regex.as_str().to_string(),
                    Value::Object(property.node.to_schema()),
                );
            }
            schema.insert("patternProperties".to_string(), Value::Object(patterns));
        }

        if let Some(required) = &self.required {
            if !required.is_empty() || self.include_empty_required {
                let names = required.iter().cloned().map(Value::String).collect();
                schema.insert("required".to_string(), Value::Array(names));
            }
        }

        schema
    }

    /// Child node for a pattern, compiling the regex on first sight
    fn pattern_node(&mut self, pattern: &str) -> Result<&mut SchemaNode> {
        if let Some(index) = self
            .pattern_properties
            .iter()
            .position(|p| p.regex.as_str() == pattern)
        {
            return Ok(&mut self.pattern_properties[index].node);
        }

        let regex = Regex::new(pattern).map_err(|e| {
            Error::invalid_schema(format!(
                "invalid \"patternProperties\" pattern {pattern:?}: {e}"
            ))
        })?;
        self.pattern_properties.push(PatternProperty {
            regex,
            node: SchemaNode::new(),
        });
        let index = self.pattern_properties.len() - 1;
        Ok(&mut self.pattern_properties[index].node)
    }

    /// First declared pattern matching an undeclared sample key, if any
    fn matching_pattern_node(&mut self, name: &str) -> Option<&mut SchemaNode> {
        self.pattern_properties
            .iter_mut()
            .find(|p| p.regex.is_match(name))
            .map(|p| &mut p.node)
    }

    /// Narrow `required` to the names present in every contribution
    fn intersect_required(&mut self, names: BTreeSet<String>) {
        self.required = match self.required.take() {
            None => Some(names),
            Some(current) => Some(current.intersection(&names).cloned().collect()),
        };
    }
}
