//! `gh` CLI adapter for the `IssueSource` port.

use serde::Deserialize;

use crate::error::ExportError;
use crate::ports::{Comment, Issue, IssueSource, PortError, RepoRef, ShellExecutor};

const GH: &str = "gh";
const ISSUE_FIELDS: &str = "number,title,state,author,createdAt,url,body";

/// Reads issues by shelling out to an authenticated `gh` CLI.
///
/// All process execution goes through the borrowed [`ShellExecutor`], so
/// the same adapter runs live, recorded, or replayed.
pub struct GhIssueSource<'a> {
    shell: &'a dyn ShellExecutor,
}

#[derive(Deserialize)]
struct RepoView {
    name: String,
    owner: RepoOwner,
}

#[derive(Deserialize)]
struct RepoOwner {
    login: String,
}

#[derive(Deserialize)]
struct IssueNumber {
    number: u64,
}

impl<'a> GhIssueSource<'a> {
    /// Creates an adapter running `gh` through `shell`.
    #[must_use]
    pub fn new(shell: &'a dyn ShellExecutor) -> Self {
        Self { shell }
    }

    /// Runs `gh` and returns stdout, failing on a non-zero exit.
    fn gh(&self, args: &[&str]) -> Result<String, PortError> {
        let output = self.shell.run(GH, args)?;
        if !output.success() {
            let stderr = output.stderr.trim();
            return Err(if stderr.is_empty() {
                format!("gh {} exited with status {}", args.join(" "), output.exit_code).into()
            } else {
                stderr.to_string().into()
            });
        }
        Ok(output.stdout)
    }
}

impl IssueSource for GhIssueSource<'_> {
    fn preflight(&self) -> Result<(), ExportError> {
        self.shell.run(GH, &["--version"]).map_err(|_| ExportError::ToolMissing(GH.into()))?;

        let status = self
            .shell
            .run(GH, &["auth", "status"])
            .map_err(|_| ExportError::ToolMissing(GH.into()))?;
        if !status.success() {
            return Err(ExportError::NotAuthenticated(status.stderr.trim().to_string()));
        }
        Ok(())
    }

    fn current_repo(&self) -> Result<RepoRef, PortError> {
        let stdout = self.gh(&["repo", "view", "--json", "owner,name"])?;
        let view: RepoView =
            serde_json::from_str(&stdout).map_err(|e| format!("JSON parse error: {e}"))?;
        if view.owner.login.is_empty() || view.name.is_empty() {
            return Err("gh returned an empty repository owner or name".into());
        }
        Ok(RepoRef::new(view.owner.login, view.name))
    }

    fn list_issue_numbers(&self, repo: &RepoRef, limit: u32) -> Result<Vec<u64>, PortError> {
        let repo = repo.to_string();
        let limit = limit.to_string();
        let stdout = self.gh(&[
            "issue", "list", "--repo", &repo, "--state", "all", "--limit", &limit, "--json",
            "number",
        ])?;
        let items: Vec<IssueNumber> =
            serde_json::from_str(&stdout).map_err(|e| format!("JSON parse error: {e}"))?;
        Ok(items.into_iter().map(|item| item.number).collect())
    }

    fn fetch_issue(&self, repo: &RepoRef, number: u64) -> Result<Issue, PortError> {
        let repo = repo.to_string();
        let number = number.to_string();
        let stdout =
            self.gh(&["issue", "view", &number, "--repo", &repo, "--json", ISSUE_FIELDS])?;
        serde_json::from_str(&stdout).map_err(|e| format!("JSON parse error: {e}").into())
    }

    fn fetch_comments(&self, repo: &RepoRef, number: u64) -> Result<Vec<Comment>, PortError> {
        let endpoint = format!("repos/{repo}/issues/{number}/comments");
        let stdout = self.gh(&["api", &endpoint, "--paginate"])?;
        parse_comment_pages(&stdout)
    }
}

/// `gh api --paginate` prints one JSON array per page, back to back.
fn parse_comment_pages(stdout: &str) -> Result<Vec<Comment>, PortError> {
    let mut comments = Vec::new();
    for page in serde_json::Deserializer::from_str(stdout).into_iter::<Vec<Comment>>() {
        comments.extend(page.map_err(|e| format!("JSON parse error: {e}"))?);
    }
    Ok(comments)
}
