use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::formatter::RecordFormatter;
use super::severity::Severity;

/// One diagnostic record as produced by a [`Logger`](super::Logger).
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub logger: &'a str,
    pub severity: Severity,
    pub args: fmt::Arguments<'a>,
}

/// Destination for records. Implementations must tolerate concurrent writers.
pub trait Sink: Send + Sync {
    fn write(&self, record: &LogRecord<'_>);

    fn flush(&self) {}
}

/// Hands records to the backend installed behind the `log` crate.
///
/// The logger name becomes the record target, so `env_logger` filters such
/// as `FLATWHITE=trace,APP=warn` select per logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogCrateSink;

impl Sink for LogCrateSink {
    fn write(&self, record: &LogRecord<'_>) {
        log::logger().log(
            &log::Record::builder()
                .args(record.args)
                .level(record.severity.into())
                .target(record.logger)
                .build(),
        );
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// A record rendered and stored by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub logger: String,
    pub severity: Severity,
    pub message: String,
}

impl CapturedRecord {
    /// Same layout the console backend uses, minus timestamp and colour.
    pub fn line(&self) -> String {
        RecordFormatter::plain_line(self.severity.as_str(), &self.logger, &self.message)
    }
}

/// Keeps every record in memory. Used for assertions in tests and for
/// applications that want to inspect their own diagnostics.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<CapturedRecord>> {
        // A panicking writer cannot leave the vector half-updated.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &LogRecord<'_>) {
        let captured = CapturedRecord {
            logger: record.logger.to_string(),
            severity: record.severity,
            message: record.args.to_string(),
        };
        self.lock().push(captured);
    }
}
