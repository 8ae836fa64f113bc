//! Diagnostic logging facade.
//!
//! A [`LogContext`] owns two named [`Logger`] handles, "core" for engine
//! diagnostics and "client" for application diagnostics. Handles forward
//! records to a [`Sink`]; the default sink hands them to the `log` crate,
//! backed by `env_logger`.

mod backend;
mod context;
mod formatter;
mod logger;
mod macros;
mod severity;
mod sink;

pub use backend::{init_backend, LoggingConfig};
pub use context::{LogContext, LoggingError};
pub use formatter::RecordFormatter;
pub use logger::Logger;
pub use severity::Severity;
pub use sink::{CapturedRecord, LogCrateSink, LogRecord, MemorySink, Sink};
