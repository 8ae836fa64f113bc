use std::fmt;
use std::sync::Arc;

use super::severity::Severity;
use super::sink::{LogRecord, Sink};

/// Shared handle to a named diagnostic sink.
///
/// Clones refer to the same logger; use [`Logger::ptr_eq`] to compare
/// identity.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    name: String,
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, sink: Arc<dyn Sink>) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                sink,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn log(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.inner.sink.write(&LogRecord {
            logger: &self.inner.name,
            severity,
            args,
        });
    }

    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Trace, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(Severity::Error, args);
    }

    pub fn flush(&self) {
        self.inner.sink.flush();
    }

    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}
