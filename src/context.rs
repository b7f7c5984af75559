//! Service context bundling the port trait objects for one run.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{GhIssueSource, LiveShellExecutor};
use crate::adapters::recording::shell::RecordingShellExecutor;
use crate::adapters::replaying::ReplayingShellExecutor;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::shell::ShellExecutor;

/// Bundles the port implementations used by a run.
///
/// Constructors wire up live, recording, or replaying process execution.
/// Log timestamps are not part of the context; see [`crate::logging::init`].
pub struct ServiceContext {
    /// Executor every `gh` invocation goes through.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Creates a context that spawns real processes.
    #[must_use]
    pub fn live() -> Self {
        Self { shell: Box::new(LiveShellExecutor) }
    }

    /// Creates a context that spawns real processes and records each one
    /// into `session`.
    #[must_use]
    pub fn recording(session: &RecordingSession) -> Self {
        Self {
            shell: Box::new(RecordingShellExecutor::new(
                Box::new(LiveShellExecutor),
                Arc::clone(&session.shell),
            )),
        }
    }

    /// Creates a context that serves every process call from the cassette
    /// at `path` instead of spawning anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// The `gh`-backed issue source running through this context's shell.
    #[must_use]
    pub fn issue_source(&self) -> GhIssueSource<'_> {
        GhIssueSource::new(self.shell.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::ports::IssueSource;
    use serde_json::json;

    #[test]
    fn replaying_context_serves_gh_from_cassette() {
        let dir = std::env::temp_dir().join("gh_issue_export_ctx_replay_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("repo.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "ctx-test");
        recorder.record(
            "shell",
            "run",
            json!({"program": "gh", "args": ["repo", "view", "--json", "owner,name"]}),
            json!({"ok": {"exit_code": 0, "stdout": "{\"name\":\"widgets\",\"owner\":{\"login\":\"acme\"}}", "stderr": ""}}),
        );
        recorder.finish().unwrap();

        let ctx = ServiceContext::replaying(&path).unwrap();
        let repo = ctx.issue_source().current_repo().unwrap();
        assert_eq!(repo.to_string(), "acme/widgets");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn replaying_context_requires_readable_cassette() {
        let result = ServiceContext::replaying(Path::new("/nonexistent/run.cassette.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn recording_context_captures_process_calls() {
        let dir = std::env::temp_dir().join("gh_issue_export_ctx_record_test");
        let _ = std::fs::remove_dir_all(&dir);
        let session = RecordingSession::start(dir.join("run.cassette.yaml")).unwrap();

        {
            let ctx = ServiceContext::recording(&session);
            ctx.shell.run("sh", &["-c", "echo recorded"]).unwrap();
        }

        let path = session.finish().unwrap();
        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].output["ok"]["stdout"], "recorded\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
