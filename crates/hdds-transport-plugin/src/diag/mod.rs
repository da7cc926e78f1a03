// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Diagnostic sink for transport configuration and plugin loading.
//!
//! Every component in this crate reports through an injected
//! [`DiagnosticSink`] instead of process-global logger state. The sink is
//! fire-and-forget: a failing output never propagates an error back into the
//! caller, and all provided sinks serialize access to their underlying stream
//! so they are safe to share across threads.
//!
//! # Provided sinks
//!
//! - [`ConsoleSink`] - stderr with a level prefix (default behavior)
//! - [`FileSink`] - appends to a log file behind a mutex
//! - [`LogSink`] - forwards to the `log` crate facade
//! - [`MemorySink`] - captures records in memory, mainly for assertions
//!
//! # Example
//!
//! ```
//! use hdds_transport_plugin::diag::{ConsoleSink, DiagnosticSink, Level};
//!
//! let sink = ConsoleSink::new(Level::Warning);
//! sink.record(Level::Warning, "loader", "bad value for UDPv4.multicast_ttl");
//! ```

mod sinks;

pub use sinks::{ConsoleSink, FileSink, LogSink, MemorySink, Record};

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Detailed development information
    Debug = 0,
    /// Normal operational information
    Info = 1,
    /// Recoverable problems (bad property values, skipped entries)
    Warning = 2,
    /// Hard failures (missing mandatory configuration, load errors)
    Error = 3,
}

impl Level {
    /// Returns the fixed-width string representation of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO ",
            Self::Warning => "WARN ",
            Self::Error => "ERROR",
        }
    }
}

/// Destination for diagnostic records.
///
/// Implementations must be thread-safe and must not block the caller on
/// output failure; `record` has no error return by design.
pub trait DiagnosticSink: Send + Sync {
    /// Record one diagnostic message.
    ///
    /// # Parameters
    /// - `level`: severity of the record
    /// - `origin`: short component name (e.g. `"resolver"`, `"loader"`)
    /// - `message`: the formatted message
    fn record(&self, level: Level, origin: &str, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
    }

    #[test]
    fn test_level_str() {
        assert_eq!(Level::Debug.as_str(), "DEBUG");
        assert_eq!(Level::Info.as_str(), "INFO ");
        assert_eq!(Level::Warning.as_str(), "WARN ");
        assert_eq!(Level::Error.as_str(), "ERROR");
    }
}
