// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-level writers.
//!
//! The logger keeps one [`Writer`] for each emitting level.  A writer captures where its level
//! currently goes, as a [`Route`], together with the sink that route resolves to.  Writers are
//! never patched: every configuration change builds a fresh set.
//!
//! Each writer offers three families of calls:
//!
//! | Call                          | After writing                          |
//! |-------------------------------|----------------------------------------|
//! | `print`, `printf`, `println`  | returns                                |
//! | `fatal`, `fatalf`, `fatalln`  | flushes and exits the process with 1   |
//! | `abort`, `abortf`, `abortln`  | panics with the message as payload     |
//!
//! All of them return immediately, without formatting anything, when the writer's route is
//! [`Route::Discard`].  That includes the fatal and abort calls: a discarded `fatal` does not
//! exit.

use crate::Level;
use crate::flags::Flags;
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Where a level's messages go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Below both thresholds
    Discard,
    /// At or above the stdout threshold only
    Console,
    /// At or above the log threshold only
    Log,
    /// At or above both thresholds
    Both,
}

impl Route {
    pub const fn resolve(level: Level, log_threshold: Level, stdout_threshold: Level) -> Route {
        let to_log = level as u8 >= log_threshold as u8;
        let to_console = level as u8 >= stdout_threshold as u8;
        match (to_console, to_log) {
            (false, false) => Route::Discard,
            (true, true) => Route::Both,
            (true, false) => Route::Console,
            (false, true) => Route::Log,
        }
    }
}

/**
The writer for one level.

Obtained from [crate::Logger::writer] or the per-level accessors such as
[crate::Logger::info].  A writer is a snapshot: it keeps writing to the sink it resolved to
even if the logger is reconfigured afterwards, so fetch a new one rather than holding on to it.
*/
#[derive(Debug, Clone)]
pub struct Writer {
    level: Level,
    route: Route,
    target: Arc<dyn Sink>,
    flags: Flags,
}

impl Writer {
    pub(crate) fn new(level: Level, route: Route, target: Arc<dyn Sink>, flags: Flags) -> Self {
        Self {
            level,
            route,
            target,
            flags,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Whether anything would be written.  Nothing is formatted when this is false.
    #[inline]
    pub fn enabled(&self) -> bool {
        self.route != Route::Discard
    }

    /// Writes the values separated by single spaces.
    pub fn print(&self, values: &[&dyn Display]) {
        if !self.enabled() {
            return;
        }
        self.output(join(values));
    }

    /// Writes pre-formatted arguments, as produced by `format_args!`.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        if !self.enabled() {
            return;
        }
        self.output(args.to_string());
    }

    /// Writes the values separated by single spaces, followed by a newline.
    pub fn println(&self, values: &[&dyn Display]) {
        if !self.enabled() {
            return;
        }
        self.output(joinln(values));
    }

    /// [Writer::print], then exit the process with status 1.
    pub fn fatal(&self, values: &[&dyn Display]) {
        if !self.enabled() {
            return;
        }
        self.output(join(values));
        self.die();
    }

    /// [Writer::printf], then exit the process with status 1.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        if !self.enabled() {
            return;
        }
        self.output(args.to_string());
        self.die();
    }

    /// [Writer::println], then exit the process with status 1.
    pub fn fatalln(&self, values: &[&dyn Display]) {
        if !self.enabled() {
            return;
        }
        self.output(joinln(values));
        self.die();
    }

    /// [Writer::print], then panic with the message.
    pub fn abort(&self, values: &[&dyn Display]) {
        if !self.enabled() {
            return;
        }
        let message = join(values);
        self.output(message.clone());
        panic!("{message}");
    }

    /// [Writer::printf], then panic with the message.
    pub fn abortf(&self, args: fmt::Arguments<'_>) {
        if !self.enabled() {
            return;
        }
        let message = args.to_string();
        self.output(message.clone());
        panic!("{message}");
    }

    /// [Writer::println], then panic with the message.
    pub fn abortln(&self, values: &[&dyn Display]) {
        if !self.enabled() {
            return;
        }
        let message = joinln(values);
        self.output(message.clone());
        panic!("{message}");
    }

    fn output(&self, message: String) {
        let mut record = LogRecord::new(self.level);
        record.log(self.level.prefix());
        record.log_timestamp(self.flags);
        record.log_owned(message);
        self.target.finish_log_record(&record);
    }

    fn die(&self) -> ! {
        self.target.prepare_to_die();
        std::process::exit(1)
    }
}

fn join(values: &[&dyn Display]) -> String {
    let mut message = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            message.push(' ');
        }
        message.push_str(&value.to_string());
    }
    message
}

fn joinln(values: &[&dyn Display]) -> String {
    let mut message = join(values);
    message.push('\n');
    message
}
