// SPDX-License-Identifier: MIT OR Apache-2.0

//! A sink that appends to a file.

use crate::error::{Error, Result};
use crate::log_record::LogRecord;
use crate::sink::Sink;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/**
Appends records to a file.

The file is opened for append and created if missing; existing content is never truncated.
It is closed when the last reference to the sink goes away, which happens when the logger
switches to another file or is dropped.
*/
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o666);
        }
        let file = options.open(path).map_err(|source| Error::OpenLogFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn finish_log_record(&self, record: &LogRecord) {
        let line = record.line();
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = file.write_all(line.as_bytes());
    }

    fn prepare_to_die(&self) {
        let mut file = match self.file.lock() {
            Ok(file) => file,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = file.flush();
        let _ = file.sync_data();
    }
}
