//! The export command: writes the report for one repository to stdout.

use std::io::{self, BufWriter};

use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::export::export_issues;

/// Run the export with the given service context, writing to stdout.
///
/// # Errors
///
/// Returns an error string if the export fails fatally.
pub fn run_with_context(ctx: &ServiceContext, cli: &Cli) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let source = ctx.issue_source();
    export_issues(&source, &cli.export_options(), &mut out).map_err(|e| e.to_string())?;
    Ok(())
}
