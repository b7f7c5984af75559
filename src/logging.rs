//! Diagnostic log setup.
//!
//! Every event becomes one stderr line, `[YYYY-MM-DD HH:MM:SS] LOG: ...` or
//! `[YYYY-MM-DD HH:MM:SS] ERROR: ...`, keeping stdout free for the report.

use std::fmt;
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

use crate::ports::Clock;

/// Timestamp layout for log lines (UTC).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats events as `[timestamp] TAG: message`.
///
/// `ERROR` and `WARN` events are tagged `ERROR`; everything else `LOG`.
pub struct ExportLogFormat {
    clock: Arc<dyn Clock>,
}

impl ExportLogFormat {
    /// Creates a formatter stamping lines with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl<S, N> FormatEvent<S, N> for ExportLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let level = *event.metadata().level();
        let tag = if level == Level::ERROR || level == Level::WARN { "ERROR" } else { "LOG" };
        write!(writer, "[{}] {tag}: ", self.clock.now().format(TIMESTAMP_FORMAT))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global stderr subscriber.
///
/// `RUST_LOG` overrides the default `info` filter. Calling this more than
/// once is harmless; later calls keep the first subscriber.
pub fn init(clock: Arc<dyn Clock>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .event_format(ExportLogFormat::new(clock))
        .try_init();
}
