//! Replaying adapter for the `ShellExecutor` port.

use std::sync::{Mutex, PoisonError};

use super::replay_result;
use crate::adapters::recording::shell::RunInput;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::shell::{ShellExecutor, ShellOutput};
use crate::ports::PortError;

/// Replays recorded command results from a cassette.
///
/// Each call must match the next recorded command exactly; a mismatch is
/// reported as an error so a stale cassette cannot silently feed the wrong
/// data.
pub struct ReplayingShellExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingShellExecutor {
    /// Creates a new replaying shell executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl ShellExecutor for ReplayingShellExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ShellOutput, PortError> {
        let interaction = {
            let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
            replayer.next_interaction("shell", "run")?.clone()
        };

        let expected = serde_json::to_value(RunInput { program, args })?;
        if interaction.input != expected {
            return Err(format!(
                "cassette mismatch at seq={}: recorded {}, got {}",
                interaction.seq, interaction.input, expected
            )
            .into());
        }
        replay_result(&interaction.output, "shell::run")
    }
}
