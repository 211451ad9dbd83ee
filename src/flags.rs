// SPDX-License-Identifier: MIT OR Apache-2.0

//! Timestamp flags.
//!
//! [`Flags`] decides what goes between a line's level prefix and its message.  With
//! [`Flags::STD`] a line looks like
//!
//! ```text
//! [I]: 2009/01/23 01:23:23 message
//! ```
//!
//! and with [`Flags::NONE`] it is just `[I]: message`.

use crate::error::Error;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use std::fmt::Display;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Flags(u8);

impl Flags {
    /// No timestamp at all.
    pub const NONE: Flags = Flags(0);
    /// Date in the local time zone: `2009/01/23`
    pub const DATE: Flags = Flags(1);
    /// Time in the local time zone: `01:23:23`
    pub const TIME: Flags = Flags(1 << 1);
    /// Microsecond resolution: `01:23:23.123123`.  Implies [Flags::TIME].
    pub const MICROSECONDS: Flags = Flags(1 << 2);
    /// Use UTC rather than the local time zone.
    pub const UTC: Flags = Flags(1 << 3);
    /// Date and time, the default.
    pub const STD: Flags = Flags(Self::DATE.0 | Self::TIME.0);

    const ALL: u8 = Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0 | Self::UTC.0;

    /// Builds flags from raw bits, dropping unknown ones.
    pub const fn from_bits_truncate(bits: u8) -> Flags {
        Flags(bits & Self::ALL)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 & (Self::DATE.0 | Self::TIME.0 | Self::MICROSECONDS.0) == 0
    }

    /// The header for the current instant.
    pub fn header_now(self) -> String {
        if self.is_empty() {
            return String::new();
        }
        if self.contains(Flags::UTC) {
            self.header_at(&Utc::now())
        } else {
            self.header_at(&Local::now())
        }
    }

    /**
    The header for a given instant, including its trailing space.

    The time zone of `at` is used as is; [Flags::UTC] is only consulted by [Flags::header_now].
    */
    pub fn header_at<Tz: TimeZone>(self, at: &DateTime<Tz>) -> String {
        let mut header = String::new();
        if self.contains(Flags::DATE) {
            header.push_str(&format!(
                "{:04}/{:02}/{:02} ",
                at.year(),
                at.month(),
                at.day()
            ));
        }
        if self.contains(Flags::TIME) || self.contains(Flags::MICROSECONDS) {
            header.push_str(&format!(
                "{:02}:{:02}:{:02}",
                at.hour(),
                at.minute(),
                at.second()
            ));
            if self.contains(Flags::MICROSECONDS) {
                // leap seconds show up as nanosecond values past one second
                header.push_str(&format!(".{:06}", (at.nanosecond() % 1_000_000_000) / 1_000));
            }
            header.push(' ');
        }
        header
    }
}

impl Default for Flags {
    fn default() -> Self {
        Flags::STD
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Self) -> Self::Output {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            (Flags::DATE, "date"),
            (Flags::TIME, "time"),
            (Flags::MICROSECONDS, "micro"),
            (Flags::UTC, "utc"),
        ];
        let mut first = true;
        for (flag, name) in names {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

/**
Parses a `|`-separated list of flag names.

Accepted names are `none`, `date`, `time`, `datetime`, `micro` and `utc`.
*/
impl FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::NONE;
        for part in s.split('|').map(str::trim) {
            flags |= match part {
                "none" => Flags::NONE,
                "date" => Flags::DATE,
                "time" => Flags::TIME,
                "datetime" => Flags::STD,
                "micro" => Flags::MICROSECONDS,
                "utc" => Flags::UTC,
                other => return Err(Error::UnknownFlag(other.to_string())),
            };
        }
        Ok(flags)
    }
}
