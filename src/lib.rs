//! Core library entry for the `gh-issue-export` CLI.
//!
//! Exports every issue of a GitHub repository, with its comment thread, as a
//! plain-text report on stdout. All GitHub access goes through the `gh` CLI.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod export;
pub mod logging;
pub mod ports;
pub mod report;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// `--help` and `--version` print and succeed. By the time an error is
/// returned it has already been reported on stderr.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or the export fails
/// fatally.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { Err(err.to_string()) } else { Ok(()) };
        }
    };
    commands::dispatch(&cli)
}
