use std::sync::Arc;

use thiserror::Error;

use super::backend::{init_backend, LoggingConfig};
use super::logger::Logger;
use super::sink::{LogCrateSink, Sink};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("{0} logger name must not be empty")]
    EmptyName(&'static str),
    #[error("core and client loggers must have distinct names, both are {0:?}")]
    DuplicateName(String),
    #[error("logger names {0:?} and {1:?} overlap, so filters for one would match the other")]
    OverlappingNames(String, String),
    #[error("logger name {0:?} contains one of '=', ',' or '/'")]
    InvalidName(String),
    #[error("another logging backend is already installed")]
    Backend,
}

/// The two process loggers.
///
/// Construct once at startup and pass by reference to anything that emits
/// diagnostics. Handles are never replaced after construction.
#[derive(Debug, Clone)]
pub struct LogContext {
    core: Logger,
    client: Logger,
}

impl LogContext {
    /// Installs the console backend and builds both loggers on top of it.
    pub fn init(config: &LoggingConfig) -> Result<Self, LoggingError> {
        validate_names(&config.core_name, &config.client_name)?;
        init_backend(config)?;
        Ok(Self::build(
            &config.core_name,
            &config.client_name,
            Arc::new(LogCrateSink),
        ))
    }

    /// Builds both loggers over a caller-provided sink. No global state is
    /// touched.
    pub fn with_sink(
        core_name: &str,
        client_name: &str,
        sink: Arc<dyn Sink>,
    ) -> Result<Self, LoggingError> {
        validate_names(core_name, client_name)?;
        Ok(Self::build(core_name, client_name, sink))
    }

    fn build(core_name: &str, client_name: &str, sink: Arc<dyn Sink>) -> Self {
        Self {
            core: Logger::new(core_name, sink.clone()),
            client: Logger::new(client_name, sink),
        }
    }

    /// Engine-internal diagnostics.
    pub fn core(&self) -> &Logger {
        &self.core
    }

    /// Application-level diagnostics.
    pub fn client(&self) -> &Logger {
        &self.client
    }

    /// Flushes pending output. The backend itself stays installed.
    pub fn shutdown(self) {
        self.core.flush();
        self.client.flush();
    }
}

/// Names double as `env_logger` targets, which filters match by prefix.
fn validate_names(core: &str, client: &str) -> Result<(), LoggingError> {
    if core.trim().is_empty() {
        return Err(LoggingError::EmptyName("core"));
    }
    if client.trim().is_empty() {
        return Err(LoggingError::EmptyName("client"));
    }
    for name in [core, client] {
        if name.contains(['=', ',', '/']) {
            return Err(LoggingError::InvalidName(name.to_string()));
        }
    }
    if core == client {
        return Err(LoggingError::DuplicateName(core.to_string()));
    }
    if core.starts_with(client) || client.starts_with(core) {
        return Err(LoggingError::OverlappingNames(
            core.to_string(),
            client.to_string(),
        ));
    }
    Ok(())
}
