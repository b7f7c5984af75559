//! Recording session owning the shell cassette recorder.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;

/// Owns the recorder shared with the recording adapters for one run.
///
/// Adapters hold clones of the `Arc`; they must be dropped before
/// [`RecordingSession::finish`] can take the recorder back.
pub struct RecordingSession {
    /// Recorder for shell interactions.
    pub shell: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Starts a session that will write its cassette to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` already exists, so earlier recordings are
    /// never overwritten.
    pub fn start(path: impl Into<PathBuf>) -> Result<Self, String> {
        let output_path = path.into();
        if output_path.exists() {
            return Err(format!("Cassette file already exists: {}", output_path.display()));
        }

        let name = format!("gh-issue-export-{}", Utc::now().format("%Y-%m-%dT%H-%M-%S"));
        let recorder = CassetteRecorder::new(&output_path, name);
        Ok(Self { shell: Arc::new(Mutex::new(recorder)) })
    }

    /// Writes the cassette to disk and returns its path.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds the recorder or the file
    /// cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.shell)
            .map_err(|_| "Recording adapter for shell still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock for shell poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write shell cassette: {e}"))
    }
}
