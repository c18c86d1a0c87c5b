//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";
const APP_NAME: &str = "wingtip";

/// Largest per-frame timestep the flight model accepts, in seconds.
pub const FRAME_DT_LIMIT: f64 = 0.05;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Frame pacing and scenario selection.
    pub simulation: SimulationConfig,
    /// Key binding settings.
    pub input: InputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Window title prefix; the HUD line is appended at runtime.
    pub title: String,
}

/// Simulation driving configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Upper bound on the per-frame timestep, in seconds.
    pub max_frame_dt: f64,
    /// Optional scenario file (RON). The built-in mission is used when absent.
    pub scenario: Option<PathBuf>,
}

/// Input configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Key binding file. Defaults to `input.ron` next to `config.ron`.
    pub bindings_file: Option<PathBuf>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter (e.g., "debug", "info", "wingtip_sim=trace").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub log_to_file: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Wingtip".to_string(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: 0.05,
            scenario: None,
        }
    }
}

impl SimulationConfig {
    /// Pull `max_frame_dt` into `(0, FRAME_DT_LIMIT]`.
    ///
    /// Returns the rejected value when it had to change. Non-positive and
    /// non-finite caps fall back to the limit, larger ones are cut to it.
    pub fn clamp_max_frame_dt(&mut self) -> Option<f64> {
        let requested = self.max_frame_dt;
        if requested.is_finite() && requested > 0.0 && requested <= FRAME_DT_LIMIT {
            return None;
        }
        self.max_frame_dt = FRAME_DT_LIMIT;
        Some(requested)
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Platform configuration directory for Wingtip, e.g. `~/.config/wingtip`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there on first run.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            return Ok(config);
        }
        let config = read_config(&config_path)?;
        log::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Write `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let write_err = |source| ConfigError::Write {
            path: config_path.clone(),
            source,
        };
        std::fs::create_dir_all(config_dir).map_err(write_err)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;
        std::fs::write(&config_path, serialized).map_err(write_err)
    }

    /// Resolve the key binding file, relative to `config_dir` when unset.
    #[must_use]
    pub fn bindings_path(&self, config_dir: &Path) -> PathBuf {
        self.input
            .bindings_file
            .clone()
            .unwrap_or_else(|| config_dir.join("input.ron"))
    }
}
