//! Tests for input resolution and reading

use super::*;
use crate::error::Error;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// ============================================================================
// Resolution Tests
// ============================================================================

#[test]
fn test_schema_paths_pass_through_in_order() {
    let second = PathBuf::from("second.json");
    let first = PathBuf::from("first.json");

    let inputs = resolve_inputs(&[second.clone(), first.clone()], &[], None).unwrap();

    assert_eq!(inputs.schemas, vec![second, first]);
    assert_eq!(inputs.objects, vec![ObjectSource::Stdin]);
}

#[test]
fn test_explicit_objects_keep_argument_order() {
    let second = PathBuf::from("second.json");
    let first = PathBuf::from("first.json");

    let inputs = resolve_inputs(&[], &[second.clone(), first.clone()], None).unwrap();

    assert_eq!(
        inputs.objects,
        vec![ObjectSource::File(second), ObjectSource::File(first)]
    );
}

#[test]
fn test_stdin_fallback_when_no_objects_and_no_glob() {
    let inputs = resolve_inputs(&[PathBuf::from("s.json")], &[], None).unwrap();
    assert_eq!(inputs.objects, vec![ObjectSource::Stdin]);
}

#[test]
fn test_explicit_objects_suppress_stdin_fallback() {
    let path = PathBuf::from("sample.json");
    let inputs = resolve_inputs(&[], &[path.clone()], None).unwrap();
    assert_eq!(inputs.objects, vec![ObjectSource::File(path)]);
}

#[test]
fn test_glob_suppresses_stdin_fallback_even_without_matches() {
    let dir = tempdir().unwrap();
    let pattern = format!("{}/*.json", dir.path().display());

    let inputs = resolve_inputs(&[], &[], Some(&pattern)).unwrap();

    assert!(inputs.objects.is_empty());
    assert!(inputs.is_empty());
}

#[test]
fn test_glob_matches_append_after_explicit_objects() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("one.json"), "{}").unwrap();
    fs::write(dir.path().join("two.json"), "{}").unwrap();

    let explicit = PathBuf::from("explicit.json");
    let pattern = format!("{}/*.json", dir.path().display());
    let inputs = resolve_inputs(&[], &[explicit.clone()], Some(&pattern)).unwrap();

    assert_eq!(inputs.objects.len(), 3);
    assert_eq!(inputs.objects[0], ObjectSource::File(explicit));
    assert!(inputs.objects[1..].contains(&ObjectSource::File(dir.path().join("one.json"))));
    assert!(inputs.objects[1..].contains(&ObjectSource::File(dir.path().join("two.json"))));
}

#[test]
fn test_invalid_glob_pattern_is_fatal() {
    let err = resolve_inputs(&[], &[], Some("***")).unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { .. }));
    assert!(err.to_string().contains("***"));
}

// ============================================================================
// Reading Tests
// ============================================================================

#[test]
fn test_read_json_file_parses_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, r#"{"a": [1, 2]}"#).unwrap();

    assert_eq!(read_json_file(&path).unwrap(), json!({"a": [1, 2]}));
}

#[test]
fn test_read_json_file_missing_is_input_not_found() {
    let err = read_json_file(Path::new("/nonexistent/data.json")).unwrap_err();
    assert!(matches!(err, Error::InputNotFound { .. }));
    assert!(err.to_string().contains("/nonexistent/data.json"));
}

#[test]
fn test_read_json_file_invalid_json_names_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = read_json_file(&path).unwrap_err();
    assert!(matches!(err, Error::MalformedJson { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_read_object_source_reads_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "42").unwrap();

    let source = ObjectSource::File(path);
    assert_eq!(read_object_source(&source).unwrap(), json!(42));
}

// ============================================================================
// Type Tests
// ============================================================================

#[test]
fn test_object_source_display() {
    assert_eq!(ObjectSource::Stdin.to_string(), "<stdin>");
    assert_eq!(
        ObjectSource::File(PathBuf::from("dir/data.json")).to_string(),
        "dir/data.json"
    );
}

#[test]
fn test_resolved_inputs_len() {
    let inputs = ResolvedInputs {
        schemas: vec![PathBuf::from("s.json")],
        objects: vec![ObjectSource::Stdin],
    };

    assert_eq!(inputs.len(), 2);
    assert!(!inputs.is_empty());
    assert!(ResolvedInputs::default().is_empty());
}
