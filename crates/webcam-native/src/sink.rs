//! Log sinks
//!
//! The bridge never calls a logging macro directly. It emits through a
//! [`LogSink`], so the platform logger can be swapped for a recorder in tests.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Severity of an emitted record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        };
        f.write_str(s)
    }
}

/// Narrow logging capability handed to the bridge.
pub trait LogSink: Send + Sync {
    fn emit(&self, level: LogLevel, tag: &str, message: &str);
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn emit(&self, level: LogLevel, tag: &str, message: &str) {
        (**self).emit(level, tag, message)
    }
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Forwards records to `tracing`, carrying the tag as a field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, level: LogLevel, tag: &str, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(tag = %tag, "{message}"),
            LogLevel::Info => tracing::info!(tag = %tag, "{message}"),
            LogLevel::Warn => tracing::warn!(tag = %tag, "{message}"),
            LogLevel::Error => tracing::error!(tag = %tag, "{message}"),
        }
    }
}

/// Writes records through the `log` facade with the tag as target and module path.
///
/// `android_logger` is installed without a fixed tag, so it takes the logcat
/// tag from each record; a reconfigured tag applies from the next call on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogcatSink;

impl LogSink for LogcatSink {
    fn emit(&self, level: LogLevel, tag: &str, message: &str) {
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{message}"))
                .level(level.into())
                .target(tag)
                .module_path(Some(tag))
                .build(),
        );
    }
}

/// Sink used by the exported entry points.
#[cfg(target_os = "android")]
pub type PlatformSink = LogcatSink;

/// Sink used by the exported entry points.
#[cfg(not(target_os = "android"))]
pub type PlatformSink = TracingSink;

/// One captured record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records emitted so far, in emission order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, level: LogLevel, tag: &str, message: &str) {
        self.records.lock().push(LogRecord {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}
