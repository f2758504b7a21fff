//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Generate one, unified JSON Schema from one or more JSON objects
/// and/or JSON Schemas
#[derive(Parser, Debug)]
#[command(name = "unischema")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pretty-print the output, indenting each level this many spaces
    #[arg(short, long, value_name = "SPACES")]
    pub indent: Option<usize>,

    /// File containing a JSON Schema to merge (may repeat); all schemas
    /// merge before any object
    #[arg(short, long, value_name = "PATH")]
    pub schema: Vec<PathBuf>,

    /// Value of the output's "$schema" keyword; "NULL" omits the keyword
    #[arg(short = '$', long, alias = "schema_uri", value_name = "URI")]
    pub schema_uri: Option<String>,

    /// Glob pattern; every matching file is read as a JSON object
    #[arg(long, value_name = "PATTERN")]
    pub glob: Option<String>,

    /// Files containing JSON objects; stdin is read when none are given
    /// and no glob pattern is set
    #[arg(value_name = "OBJECT")]
    pub object: Vec<PathBuf>,
}
