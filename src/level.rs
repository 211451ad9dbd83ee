// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels.
//!
//! Levels are totally ordered from [`Level::Trace`] to [`Level::Fatal`].  [`Level::None`] sits
//! above everything and only makes sense as a threshold; no message is ever emitted at it.

use crate::error::Error;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Level {
    /// Very detailed diagnostics
    Trace,
    /// Diagnostics for people working on the host program
    Debug,
    /// Normal operation
    #[default]
    Info,
    /// Suspicious condition
    Warn,
    /// Runtime error
    Error,
    /// Serious runtime error; the program may not be able to continue correctly
    Critical,
    /// The program cannot continue
    Fatal,
    /// Threshold-only sentinel, above every emitting level
    None,
}

impl Level {
    /// The seven levels a message can be emitted at, in order.
    pub const ACTIVE: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
        Level::Fatal,
    ];

    /// Numeric rank, `Trace` is 0.
    pub const fn rank(self) -> i64 {
        self as i64
    }

    /**
    Converts a raw rank into a level, saturating.

    Ranks below zero become [Level::Trace], ranks past the end become [Level::None].
    */
    pub const fn from_rank(rank: i64) -> Level {
        match rank {
            i64::MIN..=0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            5 => Level::Critical,
            6 => Level::Fatal,
            _ => Level::None,
        }
    }

    /// Clamps into `[Trace, Fatal]`, the range a threshold setter accepts.
    pub const fn clamp_threshold(self) -> Level {
        match self {
            Level::None => Level::Fatal,
            other => other,
        }
    }

    /// The bracketed tag written in front of every line at this level.
    pub const fn prefix(self) -> &'static str {
        match self {
            Level::Trace => "[T]: ",
            Level::Debug => "[D]: ",
            Level::Info => "[I]: ",
            Level::Warn => "[W]: ",
            Level::Error => "[E]: ",
            Level::Critical => "[C]: ",
            Level::Fatal => "[F]: ",
            Level::None => "",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Fatal => "FATAL",
            Level::None => "NONE",
        }
    }

    /// Position in [Level::ACTIVE], or `None` for the sentinel.
    pub(crate) const fn index(self) -> Option<usize> {
        match self {
            Level::None => None,
            other => Some(other as usize),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive match against the level names.
impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            "FATAL" => Ok(Level::Fatal),
            "NONE" => Ok(Level::None),
            other => Err(Error::UnknownLevel(other.to_string())),
        }
    }
}

/*
Boilerplate notes.

Copy, Eq, Ord and Hash are all natural for a fieldless enum.  Default is Info because that is the
default for both thresholds.  Display prints the name table entry so that parse(display(x)) == x.
*/
