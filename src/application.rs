//! The contract between the bootstrap and the program it hosts.

use crate::logging::LogContext;

/// Application contract implemented by code built on the engine.
///
/// The bootstrap owns the instance for exactly one [`run`](Application::run)
/// and drops it afterwards, whether or not the run succeeded.
pub trait Application {
    /// Runs until the application decides to stop.
    fn run(&mut self, log: &LogContext) -> anyhow::Result<()>;
}
