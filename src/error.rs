// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for logsplit.
//!
//! Emitting a message never fails.  Errors only come out of configuration: opening a log file,
//! or parsing level and flag names.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open log file {}: {source}", path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown log level name: {0:?}")]
    UnknownLevel(String),

    #[error("unknown log flag: {0:?}")]
    UnknownFlag(String),

    #[error("invalid value in environment variable {var}: {source}")]
    Env {
        var: &'static str,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
