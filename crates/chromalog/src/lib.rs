//! Named-channel colorized console logging.
//!
//! Chromalog wraps a small logging engine behind a [`Logger`] facade: each
//! facade owns a named channel registered process-wide, every channel shares
//! one colorized console sink, and each line is rendered by a pattern
//! formatter whose severity token comes from a pluggable flag formatter.
//!
//! # Features
//!
//! - **Named channels**: one registry entry per [`Logger`], removed on drop
//! - **Call-site capture**: macros record file, line and enclosing function
//! - **Fixed colorized layout**: `[HH:MM:SS] LEVEL name [file:line] message`
//!   with a level-colored 6-character severity token
//! - **Single shared sink**: created on first use, ANSI colors only when the
//!   terminal supports them
//!
//! # Example
//!
//! ```no_run
//! use chromalog::{log_error, log_info, Logger};
//!
//! fn main() -> Result<(), chromalog::LogError> {
//!     let net = Logger::new("net")?;
//!     log_info!(net, "listening on {}", 8080);
//!     log_error!(net, "connection lost");
//!
//!     Logger::shutdown();
//!     Ok(())
//! }
//! ```

pub mod channel;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod macros;
pub mod record;
pub mod registry;
pub mod sink;

pub use channel::Channel;
pub use error::LogError;
pub use format::{FlagFormatter, FormattedLine, LevelTokenFormatter, PatternFormatter};
pub use level::Level;
pub use logger::Logger;
pub use record::{Record, SourceLocation};
pub use registry::Registry;
