//! Severity levels for log records.

use std::fmt;

/// Severity of a log record.
///
/// The four levels in the middle (`Debug` through `Error`) are the ones the
/// logging macros emit. `Trace` and `Critical` exist so records arriving from
/// other sources still carry a well-defined severity; the pattern formatter
/// renders them with the catch-all token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Finest-grained detail, below the default channel threshold.
    Trace,
    /// Diagnostic detail useful during development.
    Debug,
    /// Normal operational messages.
    Info,
    /// Something unexpected that the process can continue past.
    Warn,
    /// A failure the caller should know about.
    Error,
    /// A failure the process likely cannot continue past.
    Critical,
}

impl Level {
    /// Lowercase name of the level, as used in human-facing messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
