//! Shell executor port for running external commands.

use serde::{Deserialize, Serialize};

use super::PortError;

/// The output of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellOutput {
    /// The exit code of the process (`-1` when killed by a signal).
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Whether the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes external programs.
///
/// A non-zero exit is still `Ok`; `Err` means the program could not be
/// spawned at all (for example, it is not on `PATH`).
pub trait ShellExecutor: Send + Sync {
    /// Runs `program` with `args`, waits for it, and captures its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    fn run(&self, program: &str, args: &[&str]) -> Result<ShellOutput, PortError>;
}
