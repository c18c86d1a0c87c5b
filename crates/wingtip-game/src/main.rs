//! Wingtip: arcade flight trainer.
//!
//! Fly the waypoint circuit, then bring the aircraft back and land it on the
//! runway. Settings live in `config.ron` and key bindings in `input.ron`
//! under the platform config directory.
//!
//! Run with: `cargo run -p wingtip-game -- --scenario path/to/mission.ron`

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::{error, info, warn};
use wingtip_app::AppError;
use wingtip_config::{CliArgs, Config, FRAME_DT_LIMIT};
use wingtip_input::InputMap;
use wingtip_sim::{FlightModel, ScenarioError, Simulation, WorldModel};

#[derive(Debug, Error)]
enum GameError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
    #[error(transparent)]
    App(#[from] AppError),
}

/// Scenario from the config, or the built-in circuit.
fn load_world(config: &Config) -> Result<WorldModel, ScenarioError> {
    match &config.simulation.scenario {
        Some(path) => WorldModel::load(path),
        None => {
            info!("Using built-in mission");
            Ok(WorldModel::default())
        }
    }
}

/// Key bindings from `path`, writing the defaults there on first run.
fn load_bindings(path: &Path) -> InputMap {
    if path.exists() {
        return InputMap::load(path);
    }
    let map = InputMap::default();
    match map.save(path) {
        Ok(()) => info!("Wrote default key bindings to {}", path.display()),
        Err(e) => warn!("Could not write key bindings to {}: {e}", path.display()),
    }
    map
}

/// Flight model whose timestep cap matches the frame clock's.
fn flight_model(config: &Config) -> FlightModel {
    FlightModel {
        max_dt: config.simulation.max_frame_dt,
        ..FlightModel::default()
    }
}

fn run(config: Config, config_dir: Option<PathBuf>) -> Result<(), GameError> {
    let world = load_world(&config)?;
    info!(
        waypoints = world.waypoints.len(),
        runway_heading = world.runway.heading,
        "Mission loaded"
    );

    let input_map = match &config_dir {
        Some(dir) => load_bindings(&config.bindings_path(dir)),
        None => InputMap::default(),
    };

    let sim = Simulation::new(world, flight_model(&config));
    wingtip_app::run(config, input_map, sim)?;
    Ok(())
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(wingtip_config::config_dir);
    let (mut config, config_error) = match config_dir.as_deref() {
        Some(dir) => match Config::load_or_create(dir) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
        None => (Config::default(), None),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    wingtip_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    info!("Wingtip v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        warn!("Using default config: {e}");
    }
    if let Some(rejected) = config.simulation.clamp_max_frame_dt() {
        warn!(
            "max_frame_dt {rejected} is outside (0, {FRAME_DT_LIMIT}], using {:.3}s",
            config.simulation.max_frame_dt
        );
    }
    info!(
        "Window: {}x{} | max dt: {:.3}s",
        config.window.width, config.window.height, config.simulation.max_frame_dt
    );

    if let Err(e) = run(config, config_dir) {
        error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wingtip_input::{Control, ControlSet};

    #[test]
    fn test_builtin_world_without_scenario() {
        let world = load_world(&Config::default()).unwrap();
        assert_eq!(world, WorldModel::default());
    }

    #[test]
    fn test_missing_scenario_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.simulation.scenario = Some(dir.path().join("nope.ron"));
        assert!(matches!(load_world(&config), Err(ScenarioError::Read { .. })));
    }

    #[test]
    fn test_scenario_from_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.ron");
        std::fs::write(
            &path,
            "(runway: (x: 0.0, z: 0.0, heading: 270.0, length: 800.0, width: 60.0), \
             waypoints: [(x: 1000.0, z: 0.0, altitude: 400.0)])",
        )
        .unwrap();

        let args = CliArgs::parse_from(["wingtip", "--scenario", path.to_str().unwrap()]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);

        let world = load_world(&config).unwrap();
        assert_eq!(world.waypoints.len(), 1);
        assert!((world.runway.heading - 270.0).abs() < 1e-12);
    }

    #[test]
    fn test_configured_frame_cap_reaches_simulation() {
        let mut config = Config::default();
        config.simulation.max_frame_dt = 0.02;
        assert!((flight_model(&config).max_dt - 0.02).abs() < 1e-12);

        let mut capped = Simulation::new(WorldModel::default(), flight_model(&config));
        let mut exact = Simulation::new(WorldModel::default(), flight_model(&config));
        capped.step(0.05, &ControlSet::default());
        exact.step(0.02, &ControlSet::default());
        assert_eq!(capped.flight(), exact.flight());
    }

    #[test]
    fn test_oversized_frame_cap_is_limited_before_flight() {
        let args = CliArgs::parse_from(["wingtip", "--max-frame-dt", "0.2"]);
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config.simulation.clamp_max_frame_dt(), Some(0.2));

        let mut sim = Simulation::new(WorldModel::default(), flight_model(&config));
        let mut reference = Simulation::default();
        sim.step(0.2, &ControlSet::default());
        reference.step(FRAME_DT_LIMIT, &ControlSet::default());
        assert_eq!(sim.flight(), reference.flight());
    }

    #[test]
    fn test_negative_frame_cap_still_flies() {
        let mut config = Config::default();
        config.simulation.max_frame_dt = -1.0;
        config.simulation.clamp_max_frame_dt();

        let mut sim = Simulation::new(WorldModel::default(), flight_model(&config));
        let start = sim.flight().position;
        for _ in 0..100 {
            sim.step(1.0 / 60.0, &ControlSet::default());
        }
        assert!(sim.flight().position.distance(start) > 1.0);
    }

    #[test]
    fn test_first_run_writes_default_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.ron");
        let map = load_bindings(&path);
        assert!(path.exists());
        assert_eq!(map, InputMap::default());

        let reloaded = load_bindings(&path);
        assert_eq!(reloaded.keys(Control::Reset), map.keys(Control::Reset));
    }
}
