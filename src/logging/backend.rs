use std::sync::OnceLock;

use super::context::LoggingError;
use super::formatter::RecordFormatter;

pub const DEFAULT_CORE_NAME: &str = "FLATWHITE";
pub const DEFAULT_CLIENT_NAME: &str = "APP";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax. Logger names are
/// record targets, so "FLATWHITE=trace,APP=warn" tunes each logger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub core_name: String,
    pub client_name: String,
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            core_name: DEFAULT_CORE_NAME.to_string(),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            timestamps: true,
        }
    }
}

/// Outcome of the one install attempt, `true` when `env_logger` won.
static BACKEND: OnceLock<bool> = OnceLock::new();

/// Installs `env_logger` as the process-wide `log` backend.
///
/// Only the first call tries to install anything. Every later call returns
/// that first outcome, so a foreign backend keeps being reported.
pub fn init_backend(config: &LoggingConfig) -> Result<(), LoggingError> {
    let installed = *BACKEND.get_or_init(|| {
        let installed = builder(config, std::env::var("RUST_LOG").ok())
            .try_init()
            .is_ok();
        if installed {
            log::debug!("logging backend initialized");
        }
        installed
    });

    if installed {
        Ok(())
    } else {
        Err(LoggingError::Backend)
    }
}

/// Configures an `env_logger` builder without installing it.
///
/// Filter precedence: `config.env_filter`, then `rust_log`, then `info`.
pub(crate) fn builder(config: &LoggingConfig, rust_log: Option<String>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = &config.env_filter {
        builder.parse_filters(filter);
    } else if let Some(filter) = rust_log {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }

    builder.write_style(config.write_style);

    let formatter = RecordFormatter::new(config.timestamps);
    builder.format(move |buf, record| formatter.write(buf, record));

    builder
}
