//! Timestamped log entries.

use std::fmt;

use chrono::{DateTime, Local};

/// Time-of-day format used for the bracketed entry prefix.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// One line of the simulation log.
///
/// The timestamp is captured when the entry is appended, not when the run
/// started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Wall-clock time of the append.
    pub timestamp: DateTime<Local>,
    /// Fixed script message.
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with `timestamp`.
    pub fn new(timestamp: DateTime<Local>, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            message: message.into(),
        }
    }

    /// Create an entry stamped with the current local time.
    pub fn now(message: impl Into<String>) -> Self {
        Self::new(Local::now(), message)
    }

    /// The `[HH:MM:SS] message` line shown in the log panel.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}
