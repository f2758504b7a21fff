//! CLI runner - executes one schema-building run

use crate::cli::commands::Cli;
use crate::error::Result;
use crate::input::resolve_inputs;
use crate::session::{SchemaUri, Session};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve every input, merge fragments then samples, print the schema
    pub fn run(&self) -> Result<()> {
        let uri = SchemaUri::from_arg(self.cli.schema_uri.as_deref());
        let inputs = resolve_inputs(&self.cli.schema, &self.cli.object, self.cli.glob.as_deref())?;
        debug!(sources = inputs.len(), "resolved inputs");

        let mut session = Session::new(uri);
        session.merge_inputs(&inputs)?;

        let rendered = session.render(self.cli.indent)?;
        println!("{rendered}");
        Ok(())
    }
}
