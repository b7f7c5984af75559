//! CLI argument definitions.

use clap::Parser;

use crate::export::{ExportOptions, DEFAULT_ISSUE_LIMIT};
use crate::ports::RepoRef;

/// Top-level CLI parser for `gh-issue-export`.
///
/// With no flags, exports every issue of the current directory's
/// repository to stdout.
#[derive(Debug, Parser)]
#[command(
    name = "gh-issue-export",
    version,
    about = "Export GitHub issues and their comment threads as plain text"
)]
pub struct Cli {
    /// Repository to export, as OWNER/NAME. Defaults to the repository of
    /// the current directory.
    #[arg(short = 'R', long, value_name = "OWNER/NAME")]
    pub repo: Option<RepoRef>,

    /// Maximum number of issues to export.
    #[arg(long, default_value_t = DEFAULT_ISSUE_LIMIT, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,
}

impl Cli {
    /// Export options described by the parsed flags.
    #[must_use]
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions { repo: self.repo.clone(), limit: self.limit }
    }
}
