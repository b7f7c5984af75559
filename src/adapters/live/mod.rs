//! Live adapters for real external interactions.

pub mod clock;
pub mod issues;
pub mod shell;

pub use clock::SystemClock;
pub use issues::GhIssueSource;
pub use shell::LiveShellExecutor;
