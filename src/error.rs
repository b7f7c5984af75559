//! Fatal export errors.

use thiserror::Error;

use crate::ports::RepoRef;

/// A failure that aborts the whole export.
///
/// Per-issue problems never surface here; they are logged and skipped.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A required external program could not be started.
    #[error("required tool `{0}` is not installed or not on PATH")]
    ToolMissing(String),
    /// The `gh` session is not logged in.
    #[error("gh is not authenticated (run `gh auth login`): {0}")]
    NotAuthenticated(String),
    /// No repository could be resolved for the current directory.
    #[error("could not determine the current repository: {0}")]
    RepoDetection(String),
    /// Listing issue numbers failed.
    #[error("failed to list issues for {repo}: {reason}")]
    Enumeration {
        /// Repository being listed.
        repo: RepoRef,
        /// What went wrong.
        reason: String,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
