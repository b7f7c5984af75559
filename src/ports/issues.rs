//! Issue source port: where repositories, issues, and comments come from.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PortError;
use crate::error::ExportError;

/// A repository on the issue host, `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    /// Account or organization that owns the repository.
    pub owner: String,
    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Builds a reference from its two halves.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self { owner: owner.into(), name: name.into() }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.trim().is_empty() && !name.trim().is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner.trim(), name.trim()))
            }
            _ => Err(format!("invalid repository {s:?}, expected OWNER/NAME")),
        }
    }
}

/// The account that wrote an issue or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Login name.
    pub login: String,
}

/// An issue's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Issue number, unique within the repository.
    pub number: u64,
    /// Issue title.
    pub title: String,
    /// State as reported by the host (e.g. `OPEN`, `CLOSED`).
    pub state: String,
    /// Author; `None` when the account no longer exists.
    pub author: Option<Author>,
    /// Creation timestamp, verbatim from the host.
    pub created_at: String,
    /// Web URL of the issue.
    pub url: String,
    /// Issue description.
    pub body: Option<String>,
}

/// One entry in an issue's discussion thread.
///
/// Accepts both the `gh issue view` field names (`author`, `createdAt`) and
/// the REST ones (`user`, `created_at`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Author; `None` when the account no longer exists.
    #[serde(alias = "user")]
    pub author: Option<Author>,
    /// Creation timestamp, verbatim from the host.
    #[serde(alias = "created_at")]
    pub created_at: String,
    /// Comment text.
    pub body: Option<String>,
}

/// Reads repositories, issues, and comments from an issue host.
///
/// The exporter only ever talks to the host through this trait, so tests
/// can swap in an in-memory source.
pub trait IssueSource {
    /// Checks that the host can be queried at all.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::ToolMissing`] or [`ExportError::NotAuthenticated`].
    fn preflight(&self) -> Result<(), ExportError>;

    /// Resolves the repository for the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository context can be determined.
    fn current_repo(&self) -> Result<RepoRef, PortError>;

    /// Lists up to `limit` issue numbers across all states.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing fails, even partially.
    fn list_issue_numbers(&self, repo: &RepoRef, limit: u32) -> Result<Vec<u64>, PortError>;

    /// Fetches one issue's metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the issue cannot be fetched or decoded.
    fn fetch_issue(&self, repo: &RepoRef, number: u64) -> Result<Issue, PortError>;

    /// Fetches one issue's comments in chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error if the comments cannot be fetched or decoded.
    fn fetch_comments(&self, repo: &RepoRef, number: u64) -> Result<Vec<Comment>, PortError>;
}
