use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use crate::logging::LoggingConfig;

/// Represents the final configuration after merging the config file and CLI args.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub logging: LoggingConfig,
    /// The config file that was actually read, if any.
    pub source: Option<PathBuf>,
}

/// When log output is coloured.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for env_logger::WriteStyle {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => env_logger::WriteStyle::Auto,
            ColorChoice::Always => env_logger::WriteStyle::Always,
            ColorChoice::Never => env_logger::WriteStyle::Never,
        }
    }
}
