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
//! The logger facade.

use crate::channel::Channel;
use crate::error::LogError;
use crate::level::Level;
use crate::record::SourceLocation;
use crate::registry::Registry;
use crate::sink::shared_sink;
use std::sync::Arc;

/// A named, pre-configured logging channel with call-site capture.
///
/// Construction registers the channel in the process-wide registry under its
/// name; dropping the logger removes that one entry. The channel writes to
/// the shared colorized console sink with a fixed line layout and a debug
/// severity threshold.
///
/// # Example
///
/// ```no_run
/// use chromalog::{log_info, Logger};
///
/// let log = Logger::new("net")?;
/// log_info!(log, "listening on {}", 8080);
/// # Ok::<(), chromalog::LogError>(())
/// ```
pub struct Logger {
    channel: Arc<Channel>,
}

impl Logger {
    /// Create a logger for the channel `name` and register it.
    ///
    /// Lazily creates the process-wide shared sink on first construction.
    /// Fails if `name` is empty or already registered.
    pub fn new(name: impl Into<String>) -> Result<Self, LogError> {
        let name = name.into();
        if name.is_empty() {
            return Err(LogError::EmptyChannelName);
        }
        let channel = Arc::new(Channel::new(name, shared_sink()));
        Registry::global().register(Arc::clone(&channel))?;
        Ok(Logger { channel })
    }

    /// The channel name this logger registered.
    pub fn name(&self) -> &str {
        self.channel.name()
    }

    /// Emit one record at `level` with explicit call-site metadata.
    ///
    /// The logging macros are the usual entry point; call this directly when
    /// the location comes from somewhere other than the immediate call site.
    pub fn log_with_location(&self, level: Level, message: &str, location: SourceLocation) {
        self.channel.log(level, message, location);
    }

    /// The underlying channel, for call sites that want to log without going
    /// through the facade. Ownership is shared with the registry.
    pub fn handle(&self) -> Arc<Channel> {
        Arc::clone(&self.channel)
    }

    /// Flush all registered channels and clear the process-wide registry.
    ///
    /// Call at most once, at process exit. Logging after shutdown is
    /// unsupported: it cannot crash, but no ordering or registry state is
    /// promised.
    pub fn shutdown() {
        Registry::global().shutdown();
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").field("channel", &self.channel.name()).finish()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        Registry::global().deregister(self.channel.name());
    }
}
