//! Recording adapter for the `ShellExecutor` port.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{PortError, ShellExecutor, ShellOutput};

/// Records shell interactions while delegating to an inner implementation.
pub struct RecordingShellExecutor {
    inner: Box<dyn ShellExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingShellExecutor {
    /// Creates a new recording shell executor wrapping the given implementation.
    pub fn new(inner: Box<dyn ShellExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

/// Cassette input for `shell::run`; the replaying adapter compares against it.
#[derive(Serialize)]
pub(crate) struct RunInput<'a> {
    pub(crate) program: &'a str,
    pub(crate) args: &'a [&'a str],
}

impl ShellExecutor for RecordingShellExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ShellOutput, PortError> {
        let result = self.inner.run(program, args);
        let input = RunInput { program, args };
        record_result(&self.recorder, "shell", "run", &input, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::shell::LiveShellExecutor;
    use crate::cassette::format::Cassette;

    #[test]
    fn records_run_interaction() {
        let dir = std::env::temp_dir().join("gh_issue_export_rec_shell_test");
        std::fs::create_dir_all(&dir).unwrap();
        let cassette_path = dir.join("shell.cassette.yaml");

        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test")));

        // Scope the adapter so it's dropped before we try to unwrap
        {
            let shell =
                RecordingShellExecutor::new(Box::new(LiveShellExecutor), Arc::clone(&recorder));
            assert!(shell.run("sh", &["-c", "echo hello"]).is_ok());
            assert!(shell.run("gh-issue-export-no-such-program", &[]).is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let cassette = Cassette::load(&cassette_path).unwrap();
        assert_eq!(cassette.interactions.len(), 2);
        let first = &cassette.interactions[0];
        assert_eq!(first.input["program"], "sh");
        assert_eq!(first.input["args"][1], "echo hello");
        assert_eq!(first.output["ok"]["stdout"], "hello\n");
        assert!(cassette.interactions[1].output["err"].is_string());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
