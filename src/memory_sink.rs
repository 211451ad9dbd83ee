// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Sink
//!
//! [`MemorySink`] captures rendered lines in memory rather than writing them anywhere.  It is
//! what the tests use to observe routing, and hosts can use it the same way to inspect what a
//! [`Logger`](crate::Logger) produced.
//!
//! ```rust
//! use logsplit::{Flags, Level, Logger, MemorySink};
//! use std::sync::Arc;
//!
//! let file = Arc::new(MemorySink::new());
//! let console = Arc::new(MemorySink::new());
//! let logger = Logger::with_sinks(file.clone(), console.clone());
//! logger.set_log_flags(Flags::NONE);
//! logger.set_log_threshold(Level::Error);
//!
//! logsplit::warn!(logger => "queue at {}%", 80);
//! assert_eq!(console.drain_logs(), "[W]: queue at 80%");
//! assert_eq!(file.drain_logs(), "");
//! ```

use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::sync::{Mutex, MutexGuard};

/// A sink that stores each line, without its trailing newline, in a `Vec<String>`.
#[derive(Debug)]
pub struct MemorySink {
    logs: Mutex<Vec<String>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: derived, required by Sink
// - Default: empty buffer
// - Clone: NOT implemented, share through Arc so every clone sees the same lines
// - PartialEq/Eq/Hash: NOT implemented, comparing mutex contents is not meaningful

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    fn logs(&self) -> MutexGuard<'_, Vec<String>> {
        match self.logs.lock() {
            Ok(logs) => logs,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /**
    Drains all lines into a single string, clearing the internal buffer.

    Lines are joined with `\n`; an empty buffer gives an empty string.
    */
    pub fn drain_logs(&self) -> String {
        let mut logs = self.logs();
        let result = logs.join("\n");
        logs.clear();
        result
    }

    /// A copy of the captured lines, leaving them in place.
    pub fn lines(&self) -> Vec<String> {
        self.logs().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.logs().is_empty()
    }
}

impl Sink for MemorySink {
    fn finish_log_record(&self, record: &LogRecord) {
        let mut line = record.line();
        line.pop();
        self.logs().push(line);
    }

    fn prepare_to_die(&self) {
        // nothing is buffered outside the vector
    }
}
