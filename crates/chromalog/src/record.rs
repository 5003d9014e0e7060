//! Per-call log record and call-site metadata.

use crate::level::Level;
use chrono::{DateTime, Local};
use std::fmt;
use std::path::Path;

/// Source position captured at the point a log call is issued.
///
/// Built by the logging macros from `file!()`, `line!()` and the enclosing
/// function name; lives only for the duration of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Path of the source file, as produced by `file!()`.
    pub file: &'static str,
    /// 1-based line number of the call site.
    pub line: u32,
    /// Fully qualified name of the enclosing function.
    pub function: &'static str,
}

impl SourceLocation {
    /// Create a source location record.
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        SourceLocation { file, line, function }
    }

    /// File name with any leading directories stripped, as rendered by the
    /// `%s` pattern flag.
    pub fn basename(&self) -> &'static str {
        Path::new(self.file)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(self.file)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.basename(), self.line)
    }
}

/// Borrowed view of a single log call, handed to the pattern formatter.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Severity of the record.
    pub level: Level,
    /// Name of the channel emitting the record.
    pub channel: &'a str,
    /// The message text, already formatted by the caller.
    pub message: &'a str,
    /// Call site the record originated from.
    pub location: SourceLocation,
    /// Local wall-clock time the record was created.
    pub timestamp: DateTime<Local>,
}

impl<'a> Record<'a> {
    /// Build a record stamped with the current local time.
    pub fn new(
        level: Level,
        channel: &'a str,
        message: &'a str,
        location: SourceLocation,
    ) -> Self {
        Record { level, channel, message, location, timestamp: Local::now() }
    }
}
