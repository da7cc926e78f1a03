// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Diagnostic sink implementations (console, file, log facade, memory).
//!
//! All sinks are thread-safe; output errors are swallowed because recording
//! a diagnostic must never fail the operation that produced it.

use super::{DiagnosticSink, Level};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Console sink writing to stderr with a level prefix.
///
/// Records below the minimum level are dropped. The stream is guarded by a
/// mutex so interleaved records from concurrent resolvers stay line-atomic.
pub struct ConsoleSink {
    min_level: Level,
    stream: Mutex<io::Stderr>,
}

impl ConsoleSink {
    /// Create a console sink with the given minimum level.
    #[must_use]
    pub fn new(min_level: Level) -> Self {
        Self {
            min_level,
            stream: Mutex::new(io::stderr()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(Level::Warning)
    }
}

impl DiagnosticSink for ConsoleSink {
    fn record(&self, level: Level, origin: &str, message: &str) {
        if level < self.min_level {
            return;
        }
        let mut stream = self.stream.lock();
        let _ = writeln!(stream, "[{}] <{}> {}", level.as_str(), origin, message);
    }
}

/// File sink appending records to a log file.
///
/// The file handle is guarded by a mutex; write failures are dropped.
pub struct FileSink {
    min_level: Level,
    file: Mutex<File>,
}

impl FileSink {
    /// Open (or create) the log file at `path` in append mode.
    pub fn new<P: AsRef<Path>>(path: P, min_level: Level) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            min_level,
            file: Mutex::new(file),
        })
    }
}

impl DiagnosticSink for FileSink {
    fn record(&self, level: Level, origin: &str, message: &str) {
        if level < self.min_level {
            return;
        }
        let mut file = self.file.lock();
        let _ = writeln!(file, "[{}] <{}> {}", level.as_str(), origin, message);
    }
}

/// Sink forwarding every record to the `log` crate facade.
///
/// Lets hosts that already route `log` output keep a single logging pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl LogSink {
    /// Create a new log-facade sink.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for LogSink {
    fn record(&self, level: Level, origin: &str, message: &str) {
        match level {
            Level::Debug => log::debug!("[{}] {}", origin, message),
            Level::Info => log::info!("[{}] {}", origin, message),
            Level::Warning => log::warn!("[{}] {}", origin, message),
            Level::Error => log::error!("[{}] {}", origin, message),
        }
    }
}

/// One captured diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub origin: String,
    pub message: String,
}

/// Sink capturing records in memory.
///
/// Mainly used by tests to assert on emitted warnings without scraping
/// process output.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    /// Create an empty memory sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records, in emission order.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Captured records at `Warning` level or above.
    #[must_use]
    pub fn warnings(&self) -> Vec<Record> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level >= Level::Warning)
            .cloned()
            .collect()
    }

    /// Number of captured records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// True if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, level: Level, origin: &str, message: &str) {
        self.records.lock().push(Record {
            level,
            origin: origin.to_string(),
            message: message.to_string(),
        });
    }
}
