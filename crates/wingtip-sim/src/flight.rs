//! Aircraft state.

use glam::{DVec2, DVec3};

/// What the aircraft is doing. Exactly one phase applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    /// Airborne or not yet resolved against the ground.
    Flying,
    /// Terminal: touched down off the runway, too fast, misaligned, or early.
    Crashed,
    /// Terminal: touched down on the runway with the mission complete.
    Landed,
}

/// Mutable state of the aircraft.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightState {
    /// World position; `y` is altitude and is never negative after a step.
    pub position: DVec3,
    /// Nose attitude, degrees, `[-20, 25]`.
    pub pitch: f64,
    /// Bank, degrees, `[-45, 45]`.
    pub roll: f64,
    /// Heading, degrees, `[0, 360)`.
    pub yaw: f64,
    /// Forward speed, `[0, 280]`.
    pub speed: f64,
    /// Climb rate; unbounded but damped every frame.
    pub vertical_speed: f64,
    /// Throttle fraction, `[0.1, 1]`.
    pub throttle: f64,
    pub crashed: bool,
    pub landed: bool,
    /// Every waypoint has been captured; required for a landing.
    pub completed_mission: bool,
    /// Never decreases between resets.
    pub score: u64,
}

impl Default for FlightState {
    /// Short final west of the runway, lined up on heading 090.
    fn default() -> Self {
        Self {
            position: DVec3::new(-300.0, 25.0, 0.0),
            pitch: 1.0,
            roll: 0.0,
            yaw: 90.0,
            speed: 78.0,
            vertical_speed: 0.0,
            throttle: 0.55,
            crashed: false,
            landed: false,
            completed_mission: false,
            score: 0,
        }
    }
}

impl FlightState {
    /// Current phase derived from the terminal flags.
    #[must_use]
    pub fn phase(&self) -> FlightPhase {
        if self.crashed {
            FlightPhase::Crashed
        } else if self.landed {
            FlightPhase::Landed
        } else {
            FlightPhase::Flying
        }
    }

    /// Crashed or landed.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.crashed || self.landed
    }

    /// Altitude above the ground plane.
    #[must_use]
    pub fn altitude(&self) -> f64 {
        self.position.y
    }

    /// Position on the ground plane as `(x, z)`.
    #[must_use]
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.position.x, self.position.z)
    }

    /// Landed, mission complete, and rolled to a stop.
    #[must_use]
    pub fn mission_accomplished(&self, stop_speed: f64) -> bool {
        self.landed && self.completed_mission && self.speed < stop_speed
    }
}
