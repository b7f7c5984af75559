//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the exporter and something
//! outside the process (time, child processes, the issue host).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod issues;
pub mod shell;

pub use clock::Clock;
pub use issues::{Author, Comment, Issue, IssueSource, RepoRef};
pub use shell::{ShellExecutor, ShellOutput};

/// Error type returned across port boundaries.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;
