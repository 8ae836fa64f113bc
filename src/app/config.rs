use crate::app::cli::Cli;
use crate::app::models::{ColorChoice, RuntimeConfig};
use crate::logging::LoggingConfig;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    logging: LoggingSection,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
struct LoggingSection {
    filter: Option<String>,
    color: Option<ColorChoice>,
    timestamps: Option<bool>,
    core_name: Option<String>,
    client_name: Option<String>,
}

fn default_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("flatwhite").join("config.toml"))
}

/// Reads the explicit config file, or the default one if it exists.
/// Returns the parsed file together with the path it came from.
fn load_config_file(explicit: Option<&Path>) -> Result<(ConfigFile, Option<PathBuf>)> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file {:?} does not exist", path);
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok((ConfigFile::default(), None)),
        },
    };

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed = parse_config(&content)
        .context(format!("Failed to parse config at {:?}", config_path))?;

    Ok((parsed, Some(config_path)))
}

fn parse_config(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

/// CLI flags win over the config file, which wins over defaults.
fn merge(cli: Cli, section: LoggingSection, source: Option<PathBuf>) -> RuntimeConfig {
    let defaults = LoggingConfig::default();

    let timestamps = if cli.no_timestamps {
        false
    } else {
        section.timestamps.unwrap_or(defaults.timestamps)
    };

    let logging = LoggingConfig {
        core_name: section.core_name.unwrap_or(defaults.core_name),
        client_name: section.client_name.unwrap_or(defaults.client_name),
        env_filter: cli.log_filter.or(section.filter),
        write_style: cli.color.or(section.color).unwrap_or_default().into(),
        timestamps,
    };

    RuntimeConfig {
        logging,
        source,
    }
}

pub fn resolve_config(cli: Cli) -> Result<RuntimeConfig> {
    let (file, source) = load_config_file(cli.config.as_deref())?;
    Ok(merge(cli, file.logging, source))
}
