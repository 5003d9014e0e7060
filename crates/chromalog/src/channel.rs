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
//! Named logging channel.

use crate::format::{LevelTokenFormatter, PatternFormatter};
use crate::level::Level;
use crate::record::{Record, SourceLocation};
use crate::sink::ConsoleSink;
use std::sync::Arc;

/// The fixed line layout: dim-gray timestamp and source location, the level
/// token colorized by the sink, the channel name on a light-gray badge, and
/// the message in bright white.
const CHANNEL_PATTERN: &str = "\x1b[90m[%H:%M:%S]\x1b[0m %^%*%$ \
                               \x1b[47m\x1b[30m %n \x1b[0m \
                               \x1b[90m[%s:%#]\x1b[0m \x1b[97m%v\x1b[0m";

/// A named logging channel bound to the shared console sink.
///
/// Channels are created through [`Logger::new`](crate::Logger::new) and live
/// in the process-wide registry for as long as their facade does. The pattern
/// is fixed at construction; the minimum severity is debug, so only trace
/// records are filtered out.
pub struct Channel {
    name: String,
    sink: Arc<ConsoleSink>,
    formatter: PatternFormatter,
    threshold: Level,
}

impl Channel {
    pub(crate) fn new(name: String, sink: Arc<ConsoleSink>) -> Self {
        let formatter = PatternFormatter::new()
            .with_flag('*', Box::new(LevelTokenFormatter))
            .with_pattern(CHANNEL_PATTERN);
        Channel { name, sink, formatter, threshold: Level::Debug }
    }

    /// The channel's registry name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether records at `level` pass this channel's severity threshold.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Format and emit one record through the shared sink. Records below the
    /// threshold are discarded before formatting.
    pub fn log(&self, level: Level, message: &str, location: SourceLocation) {
        if !self.enabled(level) {
            return;
        }
        let record = Record::new(level, &self.name, message, location);
        let line = self.formatter.format(&record);
        self.sink.write(level, &line);
    }

    /// Best-effort flush of the shared sink.
    pub fn flush(&self) {
        self.sink.flush();
    }
}
