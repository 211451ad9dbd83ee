// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log record type.
//!
//! A [`LogRecord`] is built once per emitted message and handed by reference to a
//! [`Sink`](crate::Sink).  It keeps the prefix, timestamp header and message as separate parts so
//! sinks that care (the wasm console, the in-memory sink) can look at the level and the text
//! without reparsing.
//!
//! # Example
//!
//! ```rust
//! use logsplit::{Flags, Level, LogRecord};
//!
//! let mut record = LogRecord::new(Level::Warn);
//! record.log(Level::Warn.prefix());
//! record.log_timestamp(Flags::NONE);
//! record.log_owned(format!("disk {}% full", 93));
//! assert_eq!(record.line(), "[W]: disk 93% full\n");
//! ```

use crate::Level;
use crate::flags::Flags;
use std::fmt::Display;

/**
A single formatted log line.

1.  Create a new [LogRecord] for the level.
2.  Append the prefix, the timestamp header and the message.
3.  Hand it to a [crate::Sink], which writes [LogRecord::line].
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
    level: Level,
}

impl LogRecord {
    pub fn new(level: Level) -> Self {
        Self {
            parts: Vec::with_capacity(3),
            level,
        }
    }

    /**
    Append the message to the record.

    This is called in the case that a message is not already owned.
    */
    pub fn log(&mut self, message: &str) {
        self.parts.push(message.to_string());
    }

    /// Append the message to the record, taking ownership of the message.
    pub fn log_owned(&mut self, message: String) {
        self.parts.push(message);
    }

    /// Append the timestamp header for the current instant, per `flags`.
    pub fn log_timestamp(&mut self, flags: Flags) {
        let header = flags.header_now();
        if !header.is_empty() {
            self.log_owned(header);
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /**
    The record as it is written to a byte stream.

    Exactly one newline ends the line: one is appended unless the message already ends with it.
    */
    pub fn line(&self) -> String {
        let mut line = self.to_string();
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
/*
Boilerplate notes for LogRecord:

- Clone/PartialEq/Eq/Hash: derived, records are plain data
- Default: NOT implemented, a record without a level is meaningless here
- Copy: Vec<String> is heap-allocated
- Ord/PartialOrd: no meaningful ordering for log lines
*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_newline_once() {
        let mut record = LogRecord::new(Level::Info);
        record.log("[I]: ");
        record.log("hello");
        assert_eq!(record.line(), "[I]: hello\n");

        let mut record = LogRecord::new(Level::Info);
        record.log("[I]: ");
        record.log("hello\n");
        assert_eq!(record.line(), "[I]: hello\n");
    }

    #[test]
    fn no_timestamp_adds_no_part() {
        let mut record = LogRecord::new(Level::Error);
        record.log_timestamp(Flags::NONE);
        assert!(record.parts.is_empty());
        assert_eq!(record.level(), Level::Error);
    }

    #[test]
    fn timestamp_part_is_present() {
        let mut record = LogRecord::new(Level::Error);
        record.log_timestamp(Flags::DATE | Flags::UTC);
        assert_eq!(record.parts.len(), 1);
        // YYYY/MM/DD plus the trailing space
        assert_eq!(record.parts[0].len(), 11);
    }
}
