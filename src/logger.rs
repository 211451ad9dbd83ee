// SPDX-License-Identifier: MIT OR Apache-2.0

//! The multiplexing logger.
//!
//! A [`Logger`] owns two thresholds and two sinks.  Every message level is routed by comparing
//! it against both thresholds:
//!
//! | level vs. stdout threshold | level vs. log threshold | goes to            |
//! |----------------------------|-------------------------|--------------------|
//! | below                      | below                   | nowhere            |
//! | at or above                | at or above             | console and log    |
//! | at or above                | below                   | console only       |
//! | below                      | at or above             | log only           |
//!
//! The routes are computed for all seven levels whenever anything changes, and the whole table
//! is swapped in under the lock, so an emit call always sees one consistent configuration.
//!
//! ```rust
//! use logsplit::{Level, Logger, Route};
//!
//! let logger = Logger::new();
//! logger.set_log_threshold(Level::Error);
//! logger.set_stdout_threshold(Level::Info);
//! assert_eq!(logger.route(Level::Debug), Route::Discard);
//! assert_eq!(logger.route(Level::Warn), Route::Console);
//! assert_eq!(logger.route(Level::Error), Route::Both);
//! ```

use crate::Level;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::file_sink::FileSink;
use crate::flags::Flags;
use crate::sink::{ConsoleSink, DiscardSink, Sink, TeeSink};
use crate::spinlock::Spinlock;
use crate::writer::{Route, Writer};
use std::path::Path;
use std::sync::Arc;

#[derive(Debug)]
struct State {
    log_threshold: Level,
    stdout_threshold: Level,
    log_sink: Arc<dyn Sink>,
    console_sink: Arc<dyn Sink>,
    combined_sink: Arc<dyn Sink>,
    flags: Flags,
    writers: [Writer; 7],
}

/// What a rebuild replaced.  Dropped by the caller after the lock is released, since dropping
/// the last reference to a file sink closes the file.
type Retired = (Arc<dyn Sink>, [Writer; 7]);

impl State {
    fn new(log_sink: Arc<dyn Sink>, console_sink: Arc<dyn Sink>) -> Self {
        let combined_sink = combine(&log_sink, &console_sink);
        let log_threshold = Level::Info;
        let stdout_threshold = Level::Info;
        let flags = Flags::STD;
        let writers = build_writers(
            log_threshold,
            stdout_threshold,
            &log_sink,
            &console_sink,
            &combined_sink,
            flags,
        );
        Self {
            log_threshold,
            stdout_threshold,
            log_sink,
            console_sink,
            combined_sink,
            flags,
            writers,
        }
    }

    fn rebuild(&mut self) -> Retired {
        let combined = combine(&self.log_sink, &self.console_sink);
        let writers = build_writers(
            self.log_threshold,
            self.stdout_threshold,
            &self.log_sink,
            &self.console_sink,
            &combined,
            self.flags,
        );
        (
            std::mem::replace(&mut self.combined_sink, combined),
            std::mem::replace(&mut self.writers, writers),
        )
    }
}

fn combine(log_sink: &Arc<dyn Sink>, console_sink: &Arc<dyn Sink>) -> Arc<dyn Sink> {
    Arc::new(TeeSink::new(log_sink.clone(), console_sink.clone()))
}

fn build_writers(
    log_threshold: Level,
    stdout_threshold: Level,
    log_sink: &Arc<dyn Sink>,
    console_sink: &Arc<dyn Sink>,
    combined_sink: &Arc<dyn Sink>,
    flags: Flags,
) -> [Writer; 7] {
    let discard: Arc<dyn Sink> = Arc::new(DiscardSink);
    Level::ACTIVE.map(|level| {
        let route = Route::resolve(level, log_threshold, stdout_threshold);
        let target = match route {
            Route::Discard => discard.clone(),
            Route::Console => console_sink.clone(),
            Route::Log => log_sink.clone(),
            Route::Both => combined_sink.clone(),
        };
        Writer::new(level, route, target, flags)
    })
}

/**
A level-gated logger writing to a log sink and a console sink.

By default both thresholds are [Level::Info], the log sink discards, the console sink is
standard output and lines carry date and time.  The logger is `Send + Sync`; share it with an
`Arc` or use the process-wide one in [crate::global_logger].
*/
#[derive(Debug)]
pub struct Logger {
    state: Spinlock<State>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::with_sinks(Arc::new(DiscardSink), Arc::new(ConsoleSink::new()))
    }

    /// A logger with the default thresholds and flags writing to the given sinks.
    pub fn with_sinks(log_sink: Arc<dyn Sink>, console_sink: Arc<dyn Sink>) -> Self {
        Self {
            state: Spinlock::new(State::new(log_sink, console_sink)),
        }
    }

    /// A logger with the default sinks, configured from `config`.
    pub fn with_config(config: &Config) -> Result<Self> {
        let logger = Self::new();
        logger.apply(config)?;
        Ok(logger)
    }

    /**
    Applies thresholds, flags and the optional log file in one step.

    If the log file can't be opened nothing changes and the error is returned, after a
    critical line describing it has been emitted.
    */
    pub fn apply(&self, config: &Config) -> Result<()> {
        let file = match &config.log_file {
            Some(path) => Some(self.open_log_file(path)?),
            None => None,
        };
        let retired = self.state.with_mut(|state| {
            state.log_threshold = config.log_threshold.clamp_threshold();
            state.stdout_threshold = config.stdout_threshold.clamp_threshold();
            state.flags = config.flags;
            let old_sink = file.map(|sink| std::mem::replace(&mut state.log_sink, sink));
            (old_sink, state.rebuild())
        });
        drop(retired);
        Ok(())
    }

    /// Sets the minimum level written to the log sink, clamped to `[Trace, Fatal]`.
    pub fn set_log_threshold(&self, level: Level) {
        let retired = self.state.with_mut(|state| {
            state.log_threshold = level.clamp_threshold();
            state.rebuild()
        });
        drop(retired);
    }

    /// Sets the minimum level written to the console sink, clamped to `[Trace, Fatal]`.
    pub fn set_stdout_threshold(&self, level: Level) {
        let retired = self.state.with_mut(|state| {
            state.stdout_threshold = level.clamp_threshold();
            state.rebuild()
        });
        drop(retired);
    }

    /**
    Appends the log sink's output to the file at `path`, creating it if needed.

    On failure the previous log sink stays in place, a critical line describing the failure is
    emitted through the current configuration, and the error is returned.
    */
    pub fn set_log_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let sink = self.open_log_file(path.as_ref())?;
        self.set_log_sink(sink);
        Ok(())
    }

    fn open_log_file(&self, path: &Path) -> Result<Arc<dyn Sink>> {
        match FileSink::open(path) {
            Ok(sink) => Ok(Arc::new(sink)),
            Err(err) => {
                if let Error::OpenLogFile { source, .. } = &err {
                    self.critical().println(&[
                        &"Failed to open log file:",
                        &path.display(),
                        source,
                    ]);
                }
                Err(err)
            }
        }
    }

    /// Replaces the timestamp flags used by every level.
    pub fn set_log_flags(&self, flags: Flags) {
        let retired = self.state.with_mut(|state| {
            state.flags = flags;
            state.rebuild()
        });
        drop(retired);
    }

    /// Replaces the log sink.  The previous one is dropped once no writer snapshot holds it.
    pub fn set_log_sink(&self, sink: Arc<dyn Sink>) {
        let retired = self.state.with_mut(|state| {
            let old = std::mem::replace(&mut state.log_sink, sink);
            (old, state.rebuild())
        });
        drop(retired);
    }

    /// Replaces the console sink.
    pub fn set_console_sink(&self, sink: Arc<dyn Sink>) {
        let retired = self.state.with_mut(|state| {
            let old = std::mem::replace(&mut state.console_sink, sink);
            (old, state.rebuild())
        });
        drop(retired);
    }

    pub fn log_threshold(&self) -> Level {
        self.state.with(|state| state.log_threshold)
    }

    pub fn stdout_threshold(&self) -> Level {
        self.state.with(|state| state.stdout_threshold)
    }

    pub fn log_flags(&self) -> Flags {
        self.state.with(|state| state.flags)
    }

    /// The current route for `level`.  [Level::None] is never emitted and always discards.
    pub fn route(&self, level: Level) -> Route {
        match level.index() {
            Some(i) => self.state.with(|state| state.writers[i].route()),
            None => Route::Discard,
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.route(level) != Route::Discard
    }

    /// A snapshot of the writer for `level`, or `None` for [Level::None].
    pub fn writer(&self, level: Level) -> Option<Writer> {
        level
            .index()
            .map(|i| self.state.with(|state| state.writers[i].clone()))
    }

    fn writer_at(&self, i: usize) -> Writer {
        self.state.with(|state| state.writers[i].clone())
    }

    pub fn trace(&self) -> Writer {
        self.writer_at(0)
    }

    pub fn debug(&self) -> Writer {
        self.writer_at(1)
    }

    pub fn info(&self) -> Writer {
        self.writer_at(2)
    }

    pub fn warn(&self) -> Writer {
        self.writer_at(3)
    }

    pub fn error(&self) -> Writer {
        self.writer_at(4)
    }

    pub fn critical(&self) -> Writer {
        self.writer_at(5)
    }

    pub fn fatal(&self) -> Writer {
        self.writer_at(6)
    }

    /// Flushes both sinks.  Call before exiting by some path other than a fatal call.
    pub fn prepare_to_die(&self) {
        let (log_sink, console_sink) = self
            .state
            .with(|state| (state.log_sink.clone(), state.console_sink.clone()));
        log_sink.prepare_to_die();
        console_sink.prepare_to_die();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory_sink::MemorySink;

    fn capture() -> (Logger, Arc<MemorySink>, Arc<MemorySink>) {
        let log = Arc::new(MemorySink::new());
        let console = Arc::new(MemorySink::new());
        let logger = Logger::with_sinks(log.clone(), console.clone());
        logger.set_log_flags(Flags::NONE);
        (logger, log, console)
    }

    #[test]
    fn defaults() {
        let logger = Logger::new();
        assert_eq!(logger.log_threshold(), Level::Info);
        assert_eq!(logger.stdout_threshold(), Level::Info);
        assert_eq!(logger.log_flags(), Flags::STD);
        assert_eq!(logger.route(Level::Debug), Route::Discard);
        assert_eq!(logger.route(Level::Info), Route::Both);
        assert_eq!(logger.route(Level::None), Route::Discard);
        assert!(logger.writer(Level::None).is_none());
    }

    #[test]
    fn accessors_match_levels() {
        let logger = Logger::new();
        let writers = [
            logger.trace(),
            logger.debug(),
            logger.info(),
            logger.warn(),
            logger.error(),
            logger.critical(),
            logger.fatal(),
        ];
        for (writer, level) in writers.iter().zip(Level::ACTIVE) {
            assert_eq!(writer.level(), level);
            assert_eq!(logger.writer(level).unwrap().level(), level);
        }
    }

    #[test]
    fn thresholds_clamp() {
        let logger = Logger::new();
        logger.set_log_threshold(Level::None);
        assert_eq!(logger.log_threshold(), Level::Fatal);
        logger.set_stdout_threshold(Level::from_rank(-4));
        assert_eq!(logger.stdout_threshold(), Level::Trace);
        logger.set_stdout_threshold(Level::from_rank(42));
        assert_eq!(logger.stdout_threshold(), Level::Fatal);
        // Fatal clears any clamped threshold
        assert_eq!(logger.route(Level::Fatal), Route::Both);
    }

    #[test]
    fn setters_are_idempotent() {
        let logger = Logger::new();
        logger.set_log_threshold(Level::Warn);
        let once: Vec<Route> = Level::ACTIVE.iter().map(|l| logger.route(*l)).collect();
        logger.set_log_threshold(Level::Warn);
        let twice: Vec<Route> = Level::ACTIVE.iter().map(|l| logger.route(*l)).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn writers_follow_sink_changes() {
        let (logger, log, console) = capture();
        let replacement = Arc::new(MemorySink::new());
        logger.set_console_sink(replacement.clone());
        logger.info().print(&[&"moved"]);
        assert_eq!(replacement.drain_logs(), "[I]: moved");
        assert_eq!(log.drain_logs(), "[I]: moved");
        assert!(console.is_empty());
    }

    #[test]
    fn apply_is_a_single_reconfiguration() {
        let (logger, log, console) = capture();
        let config = Config {
            log_threshold: Level::Error,
            stdout_threshold: Level::Warn,
            log_file: None,
            flags: Flags::NONE,
        };
        logger.apply(&config).unwrap();
        assert_eq!(logger.route(Level::Warn), Route::Console);
        assert_eq!(logger.route(Level::Error), Route::Both);
        assert_eq!(logger.route(Level::Info), Route::Discard);
        logger.error().printf(format_args!("x={}", 1));
        assert_eq!(log.drain_logs(), "[E]: x=1");
        assert_eq!(console.drain_logs(), "[E]: x=1");
    }

    #[test]
    fn prepare_to_die_flushes_without_writing() {
        let (logger, log, console) = capture();
        logger.prepare_to_die();
        assert!(log.is_empty());
        assert!(console.is_empty());
    }
}
