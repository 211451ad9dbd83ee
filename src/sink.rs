// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output destinations.
//!
//! A [`Sink`] receives finished [`LogRecord`]s.  The logger holds two of them, the log sink and
//! the console sink, and derives a third [`TeeSink`] that writes to both.

use crate::log_record::LogRecord;
use std::fmt::Debug;
use std::sync::Arc;

pub trait Sink: Debug + Send + Sync {
    /**
    Writes the record.

    Sinks swallow their own write errors: emitting a log line never fails the caller.
    */
    fn finish_log_record(&self, record: &LogRecord);

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn prepare_to_die(&self);
}

/*
Boilerplate notes.

# Sink

Clone on Sink doesn't make sense, sinks are shared through Arc instead.
PartialEq/Eq are unclear (data equality or the same file?), so they're left out.
Default is not sensible since who knows how the sink is constructed (does it need a path, etc.)
*/

/// Throws every record away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DiscardSink;

impl Sink for DiscardSink {
    fn finish_log_record(&self, _record: &LogRecord) {}

    fn prepare_to_die(&self) {}
}

/**
Writes to standard output.

On wasm32 there is no standard output; records go to the browser console at the matching
console level instead.
*/
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub const fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn finish_log_record(&self, record: &LogRecord) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let mut lock = std::io::stdout().lock();
            let _ = lock.write_all(record.line().as_bytes());
        }
        #[cfg(target_arch = "wasm32")]
        {
            use crate::Level;
            let msg = record.to_string();
            match record.level() {
                Level::Trace => web_sys::console::trace_1(&msg.into()),
                Level::Debug => web_sys::console::debug_1(&msg.into()),
                Level::Info => web_sys::console::info_1(&msg.into()),
                Level::Warn => web_sys::console::warn_1(&msg.into()),
                Level::Error | Level::Critical | Level::Fatal => {
                    web_sys::console::error_1(&msg.into())
                }
                Level::None => web_sys::console::log_1(&msg.into()),
            }
        }
    }

    fn prepare_to_die(&self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            use std::io::Write;
            let _ = std::io::stdout().lock().flush();
        }
    }
}

/// Writes every record to two sinks, first then second.
#[derive(Debug, Clone)]
pub struct TeeSink {
    first: Arc<dyn Sink>,
    second: Arc<dyn Sink>,
}

impl TeeSink {
    pub fn new(first: Arc<dyn Sink>, second: Arc<dyn Sink>) -> Self {
        Self { first, second }
    }
}

impl Sink for TeeSink {
    fn finish_log_record(&self, record: &LogRecord) {
        self.first.finish_log_record(record);
        self.second.finish_log_record(record);
    }

    fn prepare_to_die(&self) {
        self.first.prepare_to_die();
        self.second.prepare_to_die();
    }
}
