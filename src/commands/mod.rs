//! Command dispatch and handlers.

pub mod export;

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::adapters::live::SystemClock;
use crate::cassette::session::RecordingSession;
use crate::cli::Cli;
use crate::context::ServiceContext;
use crate::logging;

/// Environment variable naming a cassette file to record `gh` calls into.
pub const RECORD_ENV: &str = "GH_ISSUE_EXPORT_RECORD";
/// Environment variable naming a cassette file to replay `gh` calls from.
pub const REPLAY_ENV: &str = "GH_ISSUE_EXPORT_REPLAY";

/// Dispatch a parsed command line.
///
/// Installs logging, then picks the context: `GH_ISSUE_EXPORT_REPLAY`
/// serves every `gh` call from a cassette, `GH_ISSUE_EXPORT_RECORD` records
/// every call into one, otherwise `gh` runs live. Fatal errors are logged
/// before they are returned.
///
/// # Errors
///
/// Returns the error message if the export fails fatally.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    logging::init(Arc::new(SystemClock));

    let result = run_in_context(cli);
    if let Err(err) = &result {
        error!("{err}");
    }
    result
}

fn run_in_context(cli: &Cli) -> Result<(), String> {
    if let Ok(path) = env::var(REPLAY_ENV) {
        let ctx = ServiceContext::replaying(Path::new(&path))?;
        return export::run_with_context(&ctx, cli);
    }

    if let Ok(path) = env::var(RECORD_ENV) {
        let session = RecordingSession::start(path)?;
        let ctx = ServiceContext::recording(&session);
        let result = export::run_with_context(&ctx, cli);

        // Release the adapter's handle on the recorder, even on error.
        drop(ctx);
        return finish_recording(result, session.finish());
    }

    export::run_with_context(&ServiceContext::live(), cli)
}

/// Combines the export outcome with the cassette write, keeping both errors.
fn finish_recording(
    export: Result<(), String>,
    written: Result<PathBuf, String>,
) -> Result<(), String> {
    match (export, written) {
        (export, Ok(path)) => {
            info!("Recording saved to: {}", path.display());
            export
        }
        (Ok(()), Err(write_err)) => Err(write_err),
        (Err(export_err), Err(write_err)) => Err(format!("{export_err}; {write_err}")),
    }
}
