//! Scenario data: the runway and the ordered waypoint list.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::angles::normalize_degrees;
use crate::error::ScenarioError;

/// Runway pose and footprint. Fixed for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Runway {
    /// Centre, world x.
    pub x: f64,
    /// Centre, world z.
    pub z: f64,
    /// Landing heading in degrees, `[0, 360)`.
    pub heading: f64,
    /// Length along world x.
    pub length: f64,
    /// Lateral tolerance from the centreline along world z.
    pub width: f64,
}

impl Runway {
    /// Centre on the ground plane as `(x, z)`.
    #[must_use]
    pub fn centre(&self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }

    /// Whether `(x, z)` lies on the runway footprint. Both bounds are strict.
    #[must_use]
    pub fn contains(&self, x: f64, z: f64) -> bool {
        let half_length = self.length * 0.5;
        (z - self.z).abs() < self.width && x > self.x - half_length && x < self.x + half_length
    }
}

/// A mission checkpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// World x.
    pub x: f64,
    /// World z.
    pub z: f64,
    /// Target altitude.
    pub altitude: f64,
    /// Set once when captured, cleared only by a reset.
    #[serde(skip)]
    pub reached: bool,
}

impl Waypoint {
    /// An unreached waypoint.
    #[must_use]
    pub fn new(x: f64, z: f64, altitude: f64) -> Self {
        Self {
            x,
            z,
            altitude,
            reached: false,
        }
    }

    /// Position on the ground plane as `(x, z)`.
    #[must_use]
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.x, self.z)
    }
}

/// On-disk scenario description (RON).
///
/// ```ron
/// (
///     runway: (x: 0.0, z: 0.0, heading: 90.0, length: 950.0, width: 75.0),
///     waypoints: [(x: 3500.0, z: -1800.0, altitude: 1500.0)],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub runway: Runway,
    pub waypoints: Vec<Waypoint>,
}

/// Runway plus mission waypoints, in visiting order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldModel {
    pub runway: Runway,
    pub waypoints: Vec<Waypoint>,
}

impl Default for WorldModel {
    /// The built-in three-leg patrol around the home runway.
    fn default() -> Self {
        Self {
            runway: Runway {
                x: 0.0,
                z: 0.0,
                heading: 90.0,
                length: 950.0,
                width: 75.0,
            },
            waypoints: vec![
                Waypoint::new(3500.0, -1800.0, 1500.0),
                Waypoint::new(6200.0, 900.0, 1900.0),
                Waypoint::new(900.0, 3000.0, 1200.0),
            ],
        }
    }
}

impl WorldModel {
    /// Validate a parsed scenario and build a world with every waypoint unreached.
    pub fn from_scenario(file: ScenarioFile) -> Result<Self, ScenarioError> {
        let ScenarioFile {
            mut runway,
            waypoints,
        } = file;

        if !(runway.x.is_finite() && runway.z.is_finite()) {
            return Err(ScenarioError::InvalidRunway(
                "centre must be finite".to_string(),
            ));
        }
        if !runway.heading.is_finite() {
            return Err(ScenarioError::InvalidRunway(
                "heading must be finite".to_string(),
            ));
        }
        if !(runway.length.is_finite() && runway.length > 0.0) {
            return Err(ScenarioError::InvalidRunway(format!(
                "length must be positive, got {}",
                runway.length
            )));
        }
        if !(runway.width.is_finite() && runway.width > 0.0) {
            return Err(ScenarioError::InvalidRunway(format!(
                "width must be positive, got {}",
                runway.width
            )));
        }
        runway.heading = normalize_degrees(runway.heading);

        for (index, wp) in waypoints.iter().enumerate() {
            if !(wp.x.is_finite() && wp.z.is_finite() && wp.altitude.is_finite()) {
                return Err(ScenarioError::InvalidWaypoint {
                    index,
                    reason: "coordinates and altitude must be finite".to_string(),
                });
            }
        }

        let waypoints = waypoints
            .into_iter()
            .map(|wp| Waypoint::new(wp.x, wp.z, wp.altitude))
            .collect();

        Ok(Self { runway, waypoints })
    }

    /// Parse and validate a scenario from a RON string.
    pub fn from_ron(s: &str) -> Result<Self, ScenarioError> {
        let file: ScenarioFile = ron::from_str(s).map_err(ScenarioError::Parse)?;
        Self::from_scenario(file)
    }

    /// Load and validate a scenario file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let world = Self::from_ron(&contents)?;
        info!(
            "Loaded scenario {} with {} waypoints",
            path.display(),
            world.waypoints.len()
        );
        Ok(world)
    }

    /// The serializable form of this world.
    #[must_use]
    pub fn to_scenario(&self) -> ScenarioFile {
        ScenarioFile {
            runway: self.runway.clone(),
            waypoints: self.waypoints.clone(),
        }
    }

    /// Clear every waypoint's `reached` flag.
    pub fn clear_progress(&mut self) {
        for wp in &mut self.waypoints {
            wp.reached = false;
        }
    }

    /// Number of leading waypoints already reached.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.waypoints.iter().take_while(|wp| wp.reached).count()
    }
}
