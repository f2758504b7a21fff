//! Error types for unischema
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for unischema
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    #[error("Failed to read '{path}': {message}")]
    InputRead { path: String, message: String },

    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // ============================================================================
    // Parse Errors
    // ============================================================================
    #[error("Malformed JSON in '{path}': {message}")]
    MalformedJson { path: String, message: String },

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Invalid schema fragment: {message}")]
    InvalidSchema { message: String },

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Failed to serialize schema: {0}")]
    Serialize(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an input-not-found error
    pub fn input_not_found(path: impl Into<String>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an input-read error
    pub fn input_read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputRead {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-JSON error
    pub fn malformed_json(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedJson {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid-schema error
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            message: message.into(),
        }
    }
}

/// Result type alias for unischema
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::input_not_found("data.json");
        assert_eq!(err.to_string(), "Input not found: data.json");

        let err = Error::malformed_json("data.json", "expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Malformed JSON in 'data.json': expected value at line 1 column 1"
        );

        let err = Error::invalid_pattern("[", "invalid range pattern");
        assert_eq!(
            err.to_string(),
            "Invalid glob pattern '[': invalid range pattern"
        );

        let err = Error::invalid_schema("schema fragment must be a JSON object");
        assert_eq!(
            err.to_string(),
            "Invalid schema fragment: schema fragment must be a JSON object"
        );
    }

    #[test]
    fn test_serialize_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(err.to_string().starts_with("Failed to serialize schema:"));
    }
}
