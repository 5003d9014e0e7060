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
//! Error types for logger construction.

use thiserror::Error;

/// Errors that can occur while setting up a logging channel.
///
/// Constructing a [`Logger`](crate::Logger) is the only fallible operation in
/// this crate; logging itself and shutdown never return errors.
#[derive(Error, Debug)]
pub enum LogError {
    /// The channel name was empty. Names key the process-wide registry, so an
    /// empty name is never valid.
    #[error("channel name must not be empty")]
    EmptyChannelName,

    /// A channel with this name is already registered. Names must be unique
    /// for the lifetime of their channel; drop the existing logger first or
    /// pick a different name.
    #[error("a logging channel named '{0}' is already registered")]
    DuplicateChannel(String),
}
