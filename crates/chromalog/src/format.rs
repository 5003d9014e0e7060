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
//! Pattern-based record formatting.
//!
//! A [`PatternFormatter`] turns a [`Record`] into its final textual form by
//! walking a template string with `%`-prefixed substitution flags. Built-in
//! flags cover time, channel name, source location and message; additional
//! flags are installed as [`FlagFormatter`] implementations, which is how the
//! severity token of [`LevelTokenFormatter`] is wired in.

use crate::level::Level;
use crate::record::Record;
use chrono::Timelike;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::ops::Range;

/// A single custom substitution flag in a pattern.
///
/// Implementations must be stateless per call. Each [`PatternFormatter`] owns
/// its flags exclusively, so the trait carries an explicit duplication method
/// instead of requiring `Clone` on the trait object.
pub trait FlagFormatter: Send + Sync {
    /// Render this flag's substitution for `record` into `dest`.
    fn format(&self, record: &Record<'_>, dest: &mut String);

    /// Produce an independent copy of this flag formatter.
    fn clone_box(&self) -> Box<dyn FlagFormatter>;
}

impl Clone for Box<dyn FlagFormatter> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Renders the severity level as a fixed-width 6-character token.
///
/// The four levels the logging macros emit map to dedicated tokens; anything
/// else (trace, critical) falls through to `" UNKN "`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelTokenFormatter;

impl LevelTokenFormatter {
    /// The token for a given level, always exactly six characters.
    pub fn token(level: Level) -> &'static str {
        match level {
            Level::Info => " INFO ",
            Level::Warn => " WARN ",
            Level::Error => " EROR ",
            Level::Debug => " DEBG ",
            _ => " UNKN ",
        }
    }
}

impl FlagFormatter for LevelTokenFormatter {
    fn format(&self, record: &Record<'_>, dest: &mut String) {
        dest.push_str(Self::token(record.level));
    }

    fn clone_box(&self) -> Box<dyn FlagFormatter> {
        Box::new(LevelTokenFormatter)
    }
}

/// One parsed piece of a pattern string.
#[derive(Clone)]
enum Segment {
    /// Verbatim text between flags (includes any ANSI escapes baked into the
    /// pattern).
    Literal(String),
    /// `%H`, zero-padded local hour.
    Hour,
    /// `%M`, zero-padded minute.
    Minute,
    /// `%S`, zero-padded second.
    Second,
    /// `%n`, channel name.
    ChannelName,
    /// `%s`, source file basename.
    SourceFile,
    /// `%#`, source line number.
    SourceLine,
    /// `%v`, the message text.
    Message,
    /// `%^`, start of the range the sink colorizes by level.
    ColorStart,
    /// `%$`, end of the colorized range.
    ColorEnd,
    /// Any other flag character, resolved through the installed custom flags.
    Custom(char),
}

/// A formatted line plus the byte range the sink should colorize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLine {
    /// The complete line, without trailing newline.
    pub text: String,
    /// Byte range within `text` delimited by `%^`/`%$`, if the pattern used
    /// them and both markers were seen in order.
    pub color_range: Option<Range<usize>>,
}

/// Renders records according to a literal pattern string with substitution
/// flags.
///
/// Built with the builder style: install custom flags first, then compile the
/// pattern. A flag character without a registered formatter renders literally
/// (as `%x`), so a typo in a pattern is visible in the output rather than
/// silently dropped.
#[derive(Clone, Default)]
pub struct PatternFormatter {
    segments: Vec<Segment>,
    flags: HashMap<char, Box<dyn FlagFormatter>>,
}

impl PatternFormatter {
    /// Create a formatter with no pattern and no custom flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a custom flag under `flag`, replacing any previous binding.
    ///
    /// Must be called before [`with_pattern`](Self::with_pattern) for the
    /// flag to resolve during compilation.
    pub fn with_flag(mut self, flag: char, formatter: Box<dyn FlagFormatter>) -> Self {
        self.flags.insert(flag, formatter);
        self
    }

    /// Compile `pattern` into segments, replacing any previous pattern.
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.segments = compile(pattern, &self.flags);
        self
    }

    /// Render `record` into its final line.
    pub fn format(&self, record: &Record<'_>) -> FormattedLine {
        let mut text = String::with_capacity(128);
        let mut color_start = None;
        let mut color_range = None;

        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => text.push_str(s),
                Segment::Hour => {
                    let _ = write!(text, "{:02}", record.timestamp.hour());
                }
                Segment::Minute => {
                    let _ = write!(text, "{:02}", record.timestamp.minute());
                }
                Segment::Second => {
                    let _ = write!(text, "{:02}", record.timestamp.second());
                }
                Segment::ChannelName => text.push_str(record.channel),
                Segment::SourceFile => text.push_str(record.location.basename()),
                Segment::SourceLine => {
                    let _ = write!(text, "{}", record.location.line);
                }
                Segment::Message => text.push_str(record.message),
                Segment::ColorStart => color_start = Some(text.len()),
                Segment::ColorEnd => {
                    if let Some(start) = color_start.take() {
                        color_range = Some(start..text.len());
                    }
                }
                Segment::Custom(c) => match self.flags.get(c) {
                    Some(flag) => flag.format(record, &mut text),
                    None => {
                        text.push('%');
                        text.push(*c);
                    }
                },
            }
        }

        FormattedLine { text, color_range }
    }
}

/// Parse a pattern string into segments, consulting `flags` so that custom
/// flag characters compile to [`Segment::Custom`].
fn compile(pattern: &str, flags: &HashMap<char, Box<dyn FlagFormatter>>) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        let Some(flag) = chars.next() else {
            // Trailing lone '%' renders literally.
            literal.push('%');
            break;
        };
        if flag == '%' {
            literal.push('%');
            continue;
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(match flag {
            'H' => Segment::Hour,
            'M' => Segment::Minute,
            'S' => Segment::Second,
            'n' => Segment::ChannelName,
            's' => Segment::SourceFile,
            '#' => Segment::SourceLine,
            'v' => Segment::Message,
            '^' => Segment::ColorStart,
            '$' => Segment::ColorEnd,
            other if flags.contains_key(&other) => Segment::Custom(other),
            other => Segment::Literal(format!("%{other}")),
        });
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SourceLocation;

    fn record(level: Level) -> Record<'static> {
        Record::new(
            level,
            "net",
            "connection lost",
            SourceLocation::new("src/net.rs", 42, "net::connect"),
        )
    }

    #[test]
    fn test_level_tokens_are_six_chars() {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::Critical,
        ] {
            assert_eq!(LevelTokenFormatter::token(level).len(), 6);
        }
    }

    #[test]
    fn test_level_token_mapping() {
        assert_eq!(LevelTokenFormatter::token(Level::Info), " INFO ");
        assert_eq!(LevelTokenFormatter::token(Level::Warn), " WARN ");
        assert_eq!(LevelTokenFormatter::token(Level::Error), " EROR ");
        assert_eq!(LevelTokenFormatter::token(Level::Debug), " DEBG ");
    }

    #[test]
    fn test_unrecognized_levels_use_catch_all_token() {
        assert_eq!(LevelTokenFormatter::token(Level::Trace), " UNKN ");
        assert_eq!(LevelTokenFormatter::token(Level::Critical), " UNKN ");
    }

    #[test]
    fn test_pattern_substitutes_builtin_flags() {
        let formatter = PatternFormatter::new().with_pattern("%n [%s:%#] %v");
        let line = formatter.format(&record(Level::Error));
        assert_eq!(line.text, "net [net.rs:42] connection lost");
        assert_eq!(line.color_range, None);
    }

    #[test]
    fn test_custom_flag_substitution() {
        let formatter = PatternFormatter::new()
            .with_flag('*', Box::new(LevelTokenFormatter))
            .with_pattern("%*%v");
        let line = formatter.format(&record(Level::Warn));
        assert_eq!(line.text, " WARN connection lost");
    }

    #[test]
    fn test_unbound_flag_renders_literally() {
        let formatter = PatternFormatter::new().with_pattern("%q %v");
        let line = formatter.format(&record(Level::Info));
        assert_eq!(line.text, "%q connection lost");
    }

    #[test]
    fn test_escaped_percent() {
        let formatter = PatternFormatter::new().with_pattern("100%% %v");
        let line = formatter.format(&record(Level::Info));
        assert_eq!(line.text, "100% connection lost");
    }

    #[test]
    fn test_color_range_spans_marked_flags() {
        let formatter = PatternFormatter::new()
            .with_flag('*', Box::new(LevelTokenFormatter))
            .with_pattern("a %^%*%$ b");
        let line = formatter.format(&record(Level::Debug));
        assert_eq!(line.text, "a  DEBG  b");
        let range = line.color_range.expect("color range");
        assert_eq!(&line.text[range], " DEBG ");
    }

    #[test]
    fn test_time_flags_are_zero_padded() {
        let formatter = PatternFormatter::new().with_pattern("%H:%M:%S");
        let line = formatter.format(&record(Level::Info));
        assert_eq!(line.text.len(), 8);
        let parts: Vec<&str> = line.text.split(':').collect();
        assert_eq!(parts.len(), 3);
        for part in parts {
            assert_eq!(part.len(), 2);
            assert!(part.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_cloned_formatter_is_independent() {
        let formatter = PatternFormatter::new()
            .with_flag('*', Box::new(LevelTokenFormatter))
            .with_pattern("%*");
        let copy = formatter.clone();
        drop(formatter);
        assert_eq!(copy.format(&record(Level::Info)).text, " INFO ");
    }
}
