//! CLI argument parsing tests

use super::*;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[test]
fn test_verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_no_arguments() {
    let cli = Cli::try_parse_from(["unischema"]).unwrap();

    assert!(cli.indent.is_none());
    assert!(cli.schema.is_empty());
    assert!(cli.schema_uri.is_none());
    assert!(cli.glob.is_none());
    assert!(cli.object.is_empty());
}

#[test]
fn test_parse_full_surface() {
    let cli = Cli::try_parse_from([
        "unischema",
        "-i",
        "2",
        "-s",
        "a.json",
        "--schema",
        "b.json",
        "--schema-uri",
        "NULL",
        "--glob",
        "data/*.json",
        "one.json",
        "two.json",
    ])
    .unwrap();

    assert_eq!(cli.indent, Some(2));
    assert_eq!(
        cli.schema,
        vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
    );
    assert_eq!(cli.schema_uri.as_deref(), Some("NULL"));
    assert_eq!(cli.glob.as_deref(), Some("data/*.json"));
    assert_eq!(
        cli.object,
        vec![PathBuf::from("one.json"), PathBuf::from("two.json")]
    );
}

#[test]
fn test_parse_short_schema_uri_flag() {
    let cli = Cli::try_parse_from(["unischema", "-$", "http://example.com/x#"]).unwrap();
    assert_eq!(cli.schema_uri.as_deref(), Some("http://example.com/x#"));
}

#[test]
fn test_parse_schema_uri_underscore_alias() {
    let cli = Cli::try_parse_from(["unischema", "--schema_uri", "NULL"]).unwrap();
    assert_eq!(cli.schema_uri.as_deref(), Some("NULL"));
}

#[test]
fn test_indent_requires_an_integer() {
    assert!(Cli::try_parse_from(["unischema", "--indent", "two"]).is_err());
}
