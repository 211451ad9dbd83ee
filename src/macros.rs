// SPDX-License-Identifier: MIT OR Apache-2.0

//! Formatting macros.
//!
//! One macro per emitting level: [`trace!`], [`debug!`], [`info!`], [`warn!`], [`error!`],
//! [`critical!`] and [`fatal!`].  Each takes a `format!`-style template and arguments and writes
//! one line, exactly like the level's [`Writer::printf`](crate::Writer::printf).
//!
//! Without a target they use the [global logger](crate::global_logger).  To use a specific
//! [`Logger`](crate::Logger), put it first followed by `=>`:
//!
//! ```rust
//! use logsplit::{Flags, Logger, MemorySink};
//! use std::sync::Arc;
//!
//! let console = Arc::new(MemorySink::new());
//! let logger = Logger::with_sinks(Arc::new(MemorySink::new()), console.clone());
//! logger.set_log_flags(Flags::NONE);
//!
//! logsplit::error!(logger => "lost {} packets", 3);
//! logsplit::debug!(logger => "never formatted: {}", expensive());
//! # fn expensive() -> u32 { unreachable!() }
//! assert_eq!(console.drain_logs(), "[E]: lost 3 packets");
//! ```
//!
//! The arguments are only evaluated when the level is routed somewhere.
//!
//! [`fatal!`] logs at [`Level::Fatal`](crate::Level::Fatal) and returns; it does not exit.  Use
//! [`Writer::fatalf`](crate::Writer::fatalf) to log and terminate.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_printf {
    ($logger:expr, $method:ident, $($arg:tt)+) => {{
        let writer = $logger.$method();
        if writer.enabled() {
            writer.printf(::std::format_args!($($arg)+));
        }
    }};
}

/// Formats and logs a line at [`Level::Trace`](crate::Level::Trace).
#[macro_export]
macro_rules! trace {
    ($logger:expr => $($arg:tt)+) => { $crate::__log_printf!($logger, trace, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_printf!($crate::global_logger::global_logger(), trace, $($arg)+) };
}

/// Formats and logs a line at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debug {
    ($logger:expr => $($arg:tt)+) => { $crate::__log_printf!($logger, debug, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_printf!($crate::global_logger::global_logger(), debug, $($arg)+) };
}

/// Formats and logs a line at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! info {
    ($logger:expr => $($arg:tt)+) => { $crate::__log_printf!($logger, info, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_printf!($crate::global_logger::global_logger(), info, $($arg)+) };
}

/// Formats and logs a line at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warn {
    ($logger:expr => $($arg:tt)+) => { $crate::__log_printf!($logger, warn, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_printf!($crate::global_logger::global_logger(), warn, $($arg)+) };
}

/// Formats and logs a line at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! error {
    ($logger:expr => $($arg:tt)+) => { $crate::__log_printf!($logger, error, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_printf!($crate::global_logger::global_logger(), error, $($arg)+) };
}

/// Formats and logs a line at [`Level::Critical`](crate::Level::Critical).
#[macro_export]
macro_rules! critical {
    ($logger:expr => $($arg:tt)+) => { $crate::__log_printf!($logger, critical, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_printf!($crate::global_logger::global_logger(), critical, $($arg)+) };
}

/// Formats and logs a line at [`Level::Fatal`](crate::Level::Fatal).  Does not exit.
#[macro_export]
macro_rules! fatal {
    ($logger:expr => $($arg:tt)+) => { $crate::__log_printf!($logger, fatal, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_printf!($crate::global_logger::global_logger(), fatal, $($arg)+) };
}
