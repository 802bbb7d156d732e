//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terra", about = "Headless globe navigation driver")]
pub struct CliArgs {
    /// Navigate to this region only, instead of the configured tour.
    #[arg(long)]
    pub region: Option<String>,

    /// Simulated seconds to run before exiting.
    #[arg(long)]
    pub run_seconds: Option<f64>,

    /// Emit debug panel snapshots.
    #[arg(long)]
    pub show_panel: bool,

    /// Disable idle auto-rotation.
    #[arg(long)]
    pub no_auto_rotate: bool,

    /// Pace frames against the wall clock instead of simulating flat out.
    #[arg(long)]
    pub realtime: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref region) = args.region {
            self.tour.stops = vec![region.clone()];
        }
        if let Some(secs) = args.run_seconds {
            self.tour.run_seconds = secs;
        }
        if args.show_panel {
            self.debug.show_panel = true;
        }
        if args.no_auto_rotate {
            self.globe.auto_rotate = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            region: Some("africa".to_string()),
            run_seconds: Some(4.5),
            show_panel: true,
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.tour.stops, vec!["africa".to_string()]);
        assert_eq!(config.tour.run_seconds, 4.5);
        assert!(config.debug.show_panel);
        // Non-overridden fields retain defaults
        assert!(config.globe.auto_rotate);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "terra",
            "--region",
            "europe",
            "--no-auto-rotate",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.region.as_deref(), Some("europe"));
        assert!(args.no_auto_rotate);
        assert!(!args.show_panel);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
