//! Command-line argument parsing for Wingtip.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Wingtip command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "wingtip", about = "Wingtip arcade flight trainer")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Scenario file (RON) to fly instead of the built-in mission.
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    /// Cap on the per-frame timestep in seconds.
    #[arg(long)]
    pub max_frame_dt: Option<f64>,

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
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if let Some(ref path) = args.scenario {
            self.simulation.scenario = Some(path.clone());
        }
        if let Some(dt) = args.max_frame_dt {
            self.simulation.max_frame_dt = dt;
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
            width: Some(1920),
            scenario: Some(PathBuf::from("canyon.ron")),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 1920);
        assert_eq!(config.simulation.scenario, Some(PathBuf::from("canyon.ron")));
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert!((config.simulation.max_frame_dt - 0.05).abs() < f64::EPSILON);
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
        let args = CliArgs::parse_from([
            "wingtip",
            "--max-frame-dt",
            "0.02",
            "--height",
            "900",
        ]);
        assert_eq!(args.height, Some(900));
        assert_eq!(args.max_frame_dt, Some(0.02));
        assert!(args.scenario.is_none());
    }
}
