//! Replaying adapters that serve recorded interactions.

pub mod shell;

pub use shell::ReplayingShellExecutor;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ports::PortError;

/// Rebuilds a `Result` from a cassette output recorded by
/// `recording::record_result`.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: &Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
