// SPDX-License-Identifier: MIT OR Apache-2.0

//! Routing scenarios: which sink sees which level under a given pair of thresholds.

use logsplit::{Flags, Level, Logger, MemorySink, Route};
use std::sync::Arc;

fn capture() -> (Logger, Arc<MemorySink>, Arc<MemorySink>) {
    let log = Arc::new(MemorySink::new());
    let console = Arc::new(MemorySink::new());
    let logger = Logger::with_sinks(log.clone(), console.clone());
    logger.set_log_flags(Flags::NONE);
    (logger, log, console)
}

#[test]
fn default_thresholds() {
    let (logger, log, console) = capture();

    logsplit::debug!(logger => "cache warmed in {}ms", 12);
    assert!(log.is_empty());
    assert!(console.is_empty());

    logsplit::info!(logger => "listening on {}", 8000);
    assert_eq!(log.drain_logs(), "[I]: listening on 8000");
    assert_eq!(console.drain_logs(), "[I]: listening on 8000");

    logger.warn().print(&[&"slow", &"client"]);
    assert_eq!(log.drain_logs(), "[W]: slow client");
    assert_eq!(console.drain_logs(), "[W]: slow client");
}

#[test]
fn stricter_log_threshold() {
    let (logger, log, console) = capture();
    logger.set_log_threshold(Level::Error);
    logger.set_stdout_threshold(Level::Info);

    logsplit::warn!(logger => "retrying");
    assert_eq!(console.drain_logs(), "[W]: retrying");
    assert!(log.is_empty());

    logsplit::error!(logger => "gave up");
    assert_eq!(console.drain_logs(), "[E]: gave up");
    assert_eq!(log.drain_logs(), "[E]: gave up");
}

#[test]
fn stricter_console_threshold() {
    let (logger, log, console) = capture();
    logger.set_log_threshold(Level::Trace);
    logger.set_stdout_threshold(Level::Critical);

    logsplit::trace!(logger => "step {}", 1);
    logsplit::error!(logger => "step {} failed", 2);
    logsplit::critical!(logger => "halting");
    assert_eq!(
        log.drain_logs(),
        "[T]: step 1\n[E]: step 2 failed\n[C]: halting"
    );
    assert_eq!(console.drain_logs(), "[C]: halting");
}

#[test]
fn every_level_and_threshold_pair() {
    let (logger, log, console) = capture();
    for log_t in Level::ACTIVE {
        for out_t in Level::ACTIVE {
            logger.set_log_threshold(log_t);
            logger.set_stdout_threshold(out_t);
            for level in Level::ACTIVE {
                logger.writer(level).unwrap().print(&[&"x"]);
                let in_log = !log.drain_logs().is_empty();
                let in_console = !console.drain_logs().is_empty();
                assert_eq!(in_log, level >= log_t, "{level} log={log_t} out={out_t}");
                assert_eq!(
                    in_console,
                    level >= out_t,
                    "{level} log={log_t} out={out_t}"
                );
                let expected = match (in_console, in_log) {
                    (false, false) => Route::Discard,
                    (true, true) => Route::Both,
                    (true, false) => Route::Console,
                    (false, true) => Route::Log,
                };
                assert_eq!(logger.route(level), expected);
            }
        }
    }
}

#[test]
fn fatal_macro_logs_without_exiting() {
    let (logger, log, _console) = capture();
    logsplit::fatal!(logger => "still {}", "here");
    assert_eq!(log.drain_logs(), "[F]: still here");
}

#[test]
fn none_threshold_still_lets_fatal_through() {
    let (logger, log, console) = capture();
    logger.set_log_threshold("NONE".parse().unwrap());
    logger.set_stdout_threshold(Level::None);
    logsplit::critical!(logger => "dropped");
    logsplit::fatal!(logger => "kept");
    assert_eq!(log.drain_logs(), "[F]: kept");
    assert_eq!(console.drain_logs(), "[F]: kept");
}

#[test]
fn no_timestamp_means_prefix_and_message_only() {
    let (logger, log, _console) = capture();
    logger.info().println(&[&"ready"]);
    assert_eq!(log.drain_logs(), "[I]: ready");
}

#[test]
fn std_flags_put_date_and_time_between_prefix_and_message() {
    let (logger, log, _console) = capture();
    logger.set_log_flags(Flags::STD | Flags::UTC);
    logger.info().print(&[&"ready"]);
    let line = log.drain_logs();
    // [I]: YYYY/MM/DD HH:MM:SS ready
    assert!(line.starts_with("[I]: "), "{line}");
    assert!(line.ends_with(" ready"), "{line}");
    let stamp = &line["[I]: ".len()..line.len() - " ready".len()];
    assert_eq!(stamp.len(), "2009/01/23 01:23:23".len(), "{line}");
    assert_eq!(&stamp[4..5], "/");
    assert_eq!(&stamp[10..11], " ");
    assert_eq!(&stamp[13..14], ":");
}

#[test]
fn concurrent_emit_and_reconfigure() {
    let (logger, log, _console) = capture();
    let logger = Arc::new(logger);
    logger.set_log_threshold(Level::Trace);

    let emitters: Vec<_> = (0..4)
        .map(|t| {
            let logger = logger.clone();
            std::thread::spawn(move || {
                for i in 0..200 {
                    logsplit::error!(logger => "thread {} line {}", t, i);
                }
            })
        })
        .collect();
    let toggler = {
        let logger = logger.clone();
        std::thread::spawn(move || {
            for i in 0..200 {
                let level = if i % 2 == 0 { Level::Debug } else { Level::Warn };
                logger.set_stdout_threshold(level);
                logger.set_log_flags(Flags::NONE);
            }
        })
    };
    for handle in emitters {
        handle.join().unwrap();
    }
    toggler.join().unwrap();

    let lines = log.lines();
    assert_eq!(lines.len(), 800);
    assert!(lines.iter().all(|line| line.starts_with("[E]: thread ")));
}
