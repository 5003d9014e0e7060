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
//! Process-wide channel registry.
//!
//! Maps channel names to their shared [`Channel`] instances. Registration
//! happens when a [`Logger`](crate::Logger) is constructed and the entry is
//! removed when that logger is dropped. [`Registry::shutdown`] flushes and
//! clears everything at process exit.

use crate::channel::Channel;
use crate::error::LogError;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Name-keyed registry of live channels.
///
/// Thread-safe; every operation takes the map lock for its duration only. A
/// poisoned lock is recovered rather than propagated, since losing a panicked
/// writer's registration is preferable to taking down every logging caller.
pub struct Registry {
    channels: RwLock<HashMap<String, Arc<Channel>>>,
}

impl Registry {
    fn new() -> Self {
        Registry { channels: RwLock::new(HashMap::new()) }
    }

    /// The process-wide registry, created on first access.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Register `channel` under its name.
    ///
    /// Rejects duplicates: a name stays claimed until the logger owning it is
    /// dropped or the registry is shut down.
    pub fn register(&self, channel: Arc<Channel>) -> Result<(), LogError> {
        let mut channels = self.channels.write().unwrap_or_else(PoisonError::into_inner);
        if channels.contains_key(channel.name()) {
            return Err(LogError::DuplicateChannel(channel.name().to_string()));
        }
        channels.insert(channel.name().to_string(), channel);
        Ok(())
    }

    /// Look up a live channel by name.
    pub fn get(&self, name: &str) -> Option<Arc<Channel>> {
        let channels = self.channels.read().unwrap_or_else(PoisonError::into_inner);
        channels.get(name).cloned()
    }

    /// Remove one channel's entry. Removing a name that is not registered is
    /// a no-op.
    pub fn deregister(&self, name: &str) {
        let mut channels = self.channels.write().unwrap_or_else(PoisonError::into_inner);
        channels.remove(name);
    }

    /// Flush every registered channel's sink and clear the registry.
    ///
    /// Intended to run at most once, at process exit. Loggers still holding
    /// channel handles keep working in the sense that calls stay memory-safe,
    /// but their names are gone from the registry and nothing further is
    /// promised.
    pub fn shutdown(&self) {
        let mut channels = self.channels.write().unwrap_or_else(PoisonError::into_inner);
        for channel in channels.values() {
            channel.flush();
        }
        channels.clear();
    }
}
