//! The export run: resolve, enumerate, fetch, and write each issue.

use std::io::Write;

use tracing::{error, info};

use crate::error::ExportError;
use crate::ports::{IssueSource, RepoRef};
use crate::report;

/// Default ceiling on the number of issues enumerated.
pub const DEFAULT_ISSUE_LIMIT: u32 = 5000;

/// What to export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Explicit repository; `None` resolves it from the working directory.
    pub repo: Option<RepoRef>,
    /// Maximum number of issues to enumerate.
    pub limit: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { repo: None, limit: DEFAULT_ISSUE_LIMIT }
    }
}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Repository that was exported.
    pub repo: RepoRef,
    /// Distinct issue numbers enumerated.
    pub listed: usize,
    /// Issues written to the report.
    pub exported: usize,
    /// Issues whose metadata could not be fetched, in processing order.
    pub skipped: Vec<u64>,
}

/// Exports every enumerated issue of the repository to `out`.
///
/// Issues are processed one at a time in ascending number order. An issue
/// whose metadata cannot be fetched is logged and skipped; an issue whose
/// comments cannot be fetched is written with an empty discussion.
///
/// # Errors
///
/// Returns an error for the fatal cases only: the source is unusable, the
/// repository cannot be resolved, enumeration fails, or `out` fails.
pub fn export_issues<W: Write>(
    source: &dyn IssueSource,
    options: &ExportOptions,
    out: &mut W,
) -> Result<ExportSummary, ExportError> {
    source.preflight()?;

    let repo = match &options.repo {
        Some(repo) => repo.clone(),
        None => source.current_repo().map_err(|e| ExportError::RepoDetection(e.to_string()))?,
    };
    info!("Exporting issues from {repo}");

    let mut numbers = source
        .list_issue_numbers(&repo, options.limit)
        .map_err(|e| ExportError::Enumeration { repo: repo.clone(), reason: e.to_string() })?;
    numbers.sort_unstable();
    numbers.dedup();

    let mut summary =
        ExportSummary { repo, listed: numbers.len(), exported: 0, skipped: Vec::new() };
    if numbers.is_empty() {
        info!("No issues found in {}", summary.repo);
        return Ok(summary);
    }
    info!("Found {} issues", numbers.len());

    for number in numbers {
        info!("Processing issue #{number}");
        let issue = match source.fetch_issue(&summary.repo, number) {
            Ok(issue) => issue,
            Err(e) => {
                error!("Failed to fetch issue #{number}, skipping: {e}");
                summary.skipped.push(number);
                continue;
            }
        };
        let comments = source.fetch_comments(&summary.repo, number).unwrap_or_else(|e| {
            error!("Failed to fetch comments for issue #{number}, exporting without them: {e}");
            Vec::new()
        });

        report::write_issue(out, &issue, &comments)?;
        summary.exported += 1;
    }
    out.flush()?;

    info!(
        "Exported {} of {} issues from {} ({} skipped)",
        summary.exported,
        summary.listed,
        summary.repo,
        summary.skipped.len()
    );
    Ok(summary)
}
