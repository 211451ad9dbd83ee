// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger.
//!
//! Most programs want one logger that every module can reach without threading a handle
//! through.  This module holds it.  It is created on first use with [`Logger::new`]'s defaults:
//! both thresholds at [`Level::Info`](crate::Level::Info), log output discarded, console output
//! on stdout, date and time on every line.
//!
//! The free functions here are shorthands for the same methods on [`global_logger()`].
//! Libraries and tests that need isolation should build their own [`Logger`] instead.
//!
//! ```
//! use logsplit::Level;
//! use logsplit::global_logger::{global_logger, set_stdout_threshold};
//!
//! set_stdout_threshold(Level::Warn);
//! assert!(!global_logger().enabled(Level::Debug));
//! logsplit::warn!("cache miss rate {:.1}%", 12.5);
//! ```

use crate::Level;
use crate::config::Config;
use crate::error::Result;
use crate::flags::Flags;
use crate::logger::Logger;
use crate::sink::Sink;
use std::path::Path;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created with the defaults on first use.
pub fn global_logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

pub fn set_log_threshold(level: Level) {
    global_logger().set_log_threshold(level);
}

pub fn set_stdout_threshold(level: Level) {
    global_logger().set_stdout_threshold(level);
}

pub fn set_log_file(path: impl AsRef<Path>) -> Result<()> {
    global_logger().set_log_file(path)
}

pub fn set_log_flags(flags: Flags) {
    global_logger().set_log_flags(flags);
}

pub fn set_log_sink(sink: Arc<dyn Sink>) {
    global_logger().set_log_sink(sink);
}

pub fn set_console_sink(sink: Arc<dyn Sink>) {
    global_logger().set_console_sink(sink);
}

/// Applies `config` to the global logger.
pub fn configure(config: &Config) -> Result<()> {
    global_logger().apply(config)
}
