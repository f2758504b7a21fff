//! Session types: identifier policy and the engine contract

use crate::error::Result;
use serde_json::Value;

/// Standard draft identifier used when the user supplies no override
pub const DEFAULT_URI: &str = "http://json-schema.org/schema#";

/// Sentinel accepted on the command line to omit the `$schema` keyword
pub const NULL_URI: &str = "NULL";

/// Configured `$schema` identifier policy for one session
///
/// Fixed at construction time; merges never change it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SchemaUri {
    /// Standard identifier, unless a merged fragment supplies its own
    #[default]
    Default,
    /// Always exactly this identifier
    Explicit(String),
    /// No `$schema` keyword in the output
    Omit,
}

impl SchemaUri {
    /// Map the optional command-line value to a policy
    ///
    /// `None` keeps the default, the `NULL` sentinel omits the keyword,
    /// anything else is used verbatim.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Self::Default,
            Some(NULL_URI) => Self::Omit,
            Some(uri) => Self::Explicit(uri.to_string()),
        }
    }
}

/// Contract the orchestration layer expects from a schema engine
///
/// Implemented by [`SchemaBuilder`](crate::schema::SchemaBuilder); session
/// tests substitute an engine that records the calls it receives.
pub trait SchemaEngine {
    /// Merge one JSON Schema fragment into the accumulated state
    fn add_schema(&mut self, fragment: Value) -> Result<()>;

    /// Merge one JSON object sample into the accumulated state
    fn add_object(&mut self, sample: Value) -> Result<()>;

    /// Serialize the accumulated state, pretty-printed when an indent
    /// width is given
    fn to_json(&self, indent: Option<usize>) -> Result<String>;
}
