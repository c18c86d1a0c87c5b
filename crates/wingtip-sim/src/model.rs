//! Flight model tuning.
//!
//! Every constant the step, ground-contact and mission rules use lives here.
//! Units are arcade units: degrees, knots-ish speed, feet-ish altitude.

/// Tuning parameters for the arcade flight model.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightModel {
    /// Largest timestep a single frame may integrate, in seconds.
    pub max_dt: f64,

    /// Pitch and roll rate per held key, deg/s.
    pub attitude_rate: f64,
    /// Yaw rate per held key, deg/s.
    pub yaw_rate: f64,
    /// Throttle change per second while a throttle key is held.
    pub throttle_rate: f64,

    /// Throttle range.
    pub throttle_min: f64,
    pub throttle_max: f64,
    /// Pitch range, degrees.
    pub pitch_min: f64,
    pub pitch_max: f64,
    /// Roll limit, degrees (symmetric).
    pub roll_limit: f64,
    /// Speed range.
    pub speed_min: f64,
    pub speed_max: f64,

    /// Drag per unit of speed.
    pub drag_coefficient: f64,
    /// Acceleration at full throttle.
    pub engine_power: f64,
    /// Deceleration while the brake is held.
    pub brake_force: f64,

    /// Speed below which lift is penalized.
    pub stall_speed: f64,
    /// Lift lost per unit of speed below `stall_speed`.
    pub stall_penalty: f64,
    /// Base lift per unit of speed.
    pub lift_base: f64,
    /// Extra lift per unit of speed per degree of pitch.
    pub lift_per_pitch: f64,
    /// Constant lift offset subtracted every frame.
    pub lift_offset: f64,
    /// Gravity applied to vertical speed, per second.
    pub gravity: f64,
    /// Multiplicative vertical speed damping applied once per frame.
    pub vertical_damping: f64,

    /// Heading drift per degree of roll, scaled by `speed / drift_reference_speed`.
    pub roll_drift: f64,
    pub drift_reference_speed: f64,

    /// Touchdown must be slower than this to count as a landing.
    pub landing_max_speed: f64,
    /// Touchdown heading must be within this many degrees of the runway.
    pub landing_max_heading_error: f64,
    /// Speed multiplier applied on touchdown and on each rollout frame.
    pub rollout_decay: f64,
    /// Rollout speed below which the aircraft is considered stopped.
    pub rollout_stop_speed: f64,

    /// Planar radius within which a waypoint is captured.
    pub capture_radius: f64,
    /// Altitude tolerance for waypoint capture.
    pub capture_altitude_tolerance: f64,
    /// Score awarded per captured waypoint.
    pub waypoint_score: u64,
    /// Cruise bonus requires altitude above this.
    pub cruise_min_altitude: f64,
    /// Cruise bonus requires speed above this.
    pub cruise_min_speed: f64,
    /// Score awarded per qualifying frame.
    pub cruise_score: u64,
}

impl Default for FlightModel {
    fn default() -> Self {
        Self {
            max_dt: 0.05,

            attitude_rate: 35.0,
            yaw_rate: 45.0,
            throttle_rate: 0.4,

            throttle_min: 0.1,
            throttle_max: 1.0,
            pitch_min: -20.0,
            pitch_max: 25.0,
            roll_limit: 45.0,
            speed_min: 0.0,
            speed_max: 280.0,

            drag_coefficient: 0.0095,
            engine_power: 110.0,
            brake_force: 35.0,

            stall_speed: 60.0,
            stall_penalty: 0.18,
            lift_base: 0.055,
            lift_per_pitch: 0.0022,
            lift_offset: 6.0,
            gravity: 10.5,
            vertical_damping: 0.986,

            roll_drift: 0.32,
            drift_reference_speed: 120.0,

            landing_max_speed: 55.0,
            landing_max_heading_error: 18.0,
            rollout_decay: 0.98,
            rollout_stop_speed: 1.0,

            capture_radius: 250.0,
            capture_altitude_tolerance: 260.0,
            waypoint_score: 300,
            cruise_min_altitude: 50.0,
            cruise_min_speed: 65.0,
            cruise_score: 1,
        }
    }
}

impl FlightModel {
    /// Clamp a caller-supplied timestep into `[0, max_dt]`; non-finite
    /// values integrate nothing.
    #[must_use]
    pub fn sanitize_dt(&self, dt: f64) -> f64 {
        if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        }
    }

    /// Lift for the given speed and pitch, including the low-speed penalty.
    #[must_use]
    pub fn lift(&self, speed: f64, pitch: f64) -> f64 {
        let penalty = if speed < self.stall_speed {
            (self.stall_speed - speed) * self.stall_penalty
        } else {
            0.0
        };
        speed * (self.lift_base + pitch * self.lift_per_pitch) - self.lift_offset - penalty
    }
}
