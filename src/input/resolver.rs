//! Input resolution and reading
//!
//! Collects every input of a run into two ordered lists and reads them
//! one at a time. Schema fragments always merge before object samples,
//! so the two lists stay separate instead of interleaving by argument
//! position.

use crate::error::{Error, Result};
use crate::input::types::{ObjectSource, ResolvedInputs};
use serde_json::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve command-line inputs into ordered source lists
///
/// Explicit object paths come before glob matches. When no object path
/// and no glob pattern are given, standard input becomes the sole object
/// source; a supplied glob pattern suppresses that fallback even when it
/// matches nothing.
pub fn resolve_inputs(
    schemas: &[PathBuf],
    objects: &[PathBuf],
    pattern: Option<&str>,
) -> Result<ResolvedInputs> {
    let mut sources: Vec<ObjectSource> =
        objects.iter().cloned().map(ObjectSource::File).collect();

    if let Some(pattern) = pattern {
        let matches = expand_glob(pattern)?;
        debug!(pattern, matches = matches.len(), "expanded glob pattern");
        sources.extend(matches.into_iter().map(ObjectSource::File));
    } else if sources.is_empty() {
        sources.push(ObjectSource::Stdin);
    }

    Ok(ResolvedInputs {
        schemas: schemas.to_vec(),
        objects: sources,
    })
}

/// Expand a glob pattern into matching paths
///
/// Zero matches is not an error; a syntactically invalid pattern is.
fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries =
        glob::glob(pattern).map_err(|e| Error::invalid_pattern(pattern, e.to_string()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().display().to_string();
            Error::input_read(path, e.into_error().to_string())
        })?;
        paths.push(path);
    }
    Ok(paths)
}

/// Read and parse one JSON file
///
/// The file is read fully and closed before parsing; errors carry the
/// offending path.
pub fn read_json_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::input_not_found(path.display().to_string())
        } else {
            Error::input_read(path.display().to_string(), e.to_string())
        }
    })?;

    serde_json::from_str(&content)
        .map_err(|e| Error::malformed_json(path.display().to_string(), e.to_string()))
}

/// Read and parse one object source, file or standard input
pub fn read_object_source(source: &ObjectSource) -> Result<Value> {
    match source {
        ObjectSource::File(path) => read_json_file(path),
        ObjectSource::Stdin => read_stdin(),
    }
}

/// Read standard input to end and parse it as JSON
fn read_stdin() -> Result<Value> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|e| Error::input_read("<stdin>", e.to_string()))?;

    serde_json::from_str(&content).map_err(|e| Error::malformed_json("<stdin>", e.to_string()))
}
