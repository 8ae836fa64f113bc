use std::path::PathBuf;

use clap::Parser;

use crate::app::models::ColorChoice;

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "FlatWhite3D engine runtime")]
pub struct Cli {
    /// Config file to read instead of ~/.config/flatwhite/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter in env_logger syntax (e.g. 'FLATWHITE=trace,APP=warn')
    #[arg(long)]
    pub log_filter: Option<String>,

    /// When to colour log output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Leave timestamps out of log records
    #[arg(long)]
    pub no_timestamps: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_no_overrides() {
        let cli = Cli::try_parse_from(["sandbox"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_filter.is_none());
        assert!(cli.color.is_none());
        assert!(!cli.no_timestamps);
    }

    #[test]
    fn parses_every_flag() {
        let cli = Cli::try_parse_from([
            "sandbox",
            "--config",
            "/tmp/flatwhite.toml",
            "--log-filter",
            "FLATWHITE=trace,APP=warn",
            "--color",
            "never",
            "--no-timestamps",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/flatwhite.toml")));
        assert_eq!(cli.log_filter.as_deref(), Some("FLATWHITE=trace,APP=warn"));
        assert_eq!(cli.color, Some(ColorChoice::Never));
        assert!(cli.no_timestamps);
    }

    #[test]
    fn rejects_unknown_color() {
        assert!(Cli::try_parse_from(["sandbox", "--color", "sometimes"]).is_err());
    }
}
