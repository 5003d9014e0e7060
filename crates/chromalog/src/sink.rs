// Copyright (C) 2026  Chromalog Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//! Colorized console sink.
//!
//! One [`ConsoleSink`] instance is shared by every channel in the process,
//! created on first use via [`shared_sink`] and immutable afterwards. Writes
//! are fail-safe: sink I/O errors are dropped, never surfaced to log callers.

use crate::format::FormattedLine;
use crate::level::Level;
use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

const RESET: &str = "\x1b[0m";

/// Writes formatted lines to stdout, wrapping each line's color range in the
/// level's ANSI color pair when the terminal supports it.
pub struct ConsoleSink {
    colors_enabled: bool,
}

impl ConsoleSink {
    fn new(colors_enabled: bool) -> Self {
        ConsoleSink { colors_enabled }
    }

    /// Background/foreground escape pair for a level, assigned statically
    /// when the sink is created. Levels outside the four mapped ones render
    /// their range uncolored.
    fn color_codes(level: Level) -> Option<&'static str> {
        match level {
            Level::Info => Some("\x1b[42m\x1b[30m"),
            Level::Warn => Some("\x1b[43m\x1b[30m"),
            Level::Error => Some("\x1b[41m\x1b[37m"),
            Level::Debug => Some("\x1b[46m\x1b[30m"),
            _ => None,
        }
    }

    /// Splice the level color pair around the line's color range, if both
    /// colors are enabled and the level has a mapping.
    fn colorize(&self, level: Level, line: &FormattedLine) -> String {
        let codes = if self.colors_enabled { Self::color_codes(level) } else { None };
        match (codes, &line.color_range) {
            (Some(codes), Some(range)) => {
                let mut out = String::with_capacity(line.text.len() + codes.len() + RESET.len());
                out.push_str(&line.text[..range.start]);
                out.push_str(codes);
                out.push_str(&line.text[range.clone()]);
                out.push_str(RESET);
                out.push_str(&line.text[range.end..]);
                out
            }
            _ => line.text.clone(),
        }
    }

    /// Write one formatted line followed by a newline. I/O errors are
    /// silently dropped.
    pub fn write(&self, level: Level, line: &FormattedLine) {
        let rendered = self.colorize(level, line);
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{rendered}");
    }

    /// Best-effort flush of the underlying stream.
    pub fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// The process-wide shared sink, constructed exactly once on first use.
///
/// Color support is probed once at construction via the `console` crate and
/// never re-evaluated.
pub fn shared_sink() -> Arc<ConsoleSink> {
    static SHARED: OnceLock<Arc<ConsoleSink>> = OnceLock::new();
    Arc::clone(SHARED.get_or_init(|| Arc::new(ConsoleSink::new(console::colors_enabled()))))
}
