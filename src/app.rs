pub mod cli;
pub mod config;
pub mod models;

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use thiserror::Error;

use self::cli::Cli;
use self::config::resolve_config;
use self::models::RuntimeConfig;
use crate::application::Application;
use crate::logging::LogContext;
use crate::{fw_core_trace, fw_core_warn, fw_info};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("application factory did not produce an application")]
    NoApplication,
}

/// Process entry: runs the bootstrap and turns its outcome into an exit code.
pub fn main<F>(factory: F) -> ExitCode
where
    F: FnOnce() -> Option<Box<dyn Application>>,
{
    match run(factory) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Parses args, resolves configuration and hands over to [`launch`].
pub fn run<F>(factory: F) -> Result<()>
where
    F: FnOnce() -> Option<Box<dyn Application>>,
{
    let args = Cli::parse();
    let config = resolve_config(args)?;
    launch(&config, factory)
}

/// Brings logging up from `config`, runs the application, then flushes logs.
pub fn launch<F>(config: &RuntimeConfig, factory: F) -> Result<()>
where
    F: FnOnce() -> Option<Box<dyn Application>>,
{
    let log = LogContext::init(&config.logging).context("Failed to initialize logging")?;

    if let Some(path) = &config.source {
        fw_core_trace!(log, "configuration loaded from {}", path.display());
    }

    let result = start(&log, factory);
    log.shutdown();
    result
}

/// Startup sequence against an existing logging context: announce, create,
/// run, release.
pub fn start<F>(log: &LogContext, factory: F) -> Result<()>
where
    F: FnOnce() -> Option<Box<dyn Application>>,
{
    fw_core_warn!(log, "Starting FlatWhite3D Engine...");
    fw_info!(log, "version: {0}", env!("CARGO_PKG_VERSION"));

    let mut app = factory().ok_or(BootstrapError::NoApplication)?;
    fw_core_trace!(log, "application created");

    let outcome = app.run(log);
    drop(app);
    fw_core_trace!(log, "application released");

    outcome.context("Application run failed")
}
