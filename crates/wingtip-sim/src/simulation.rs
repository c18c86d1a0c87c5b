//! The simulation context and its per-frame step.

use tracing::{debug, info};
use wingtip_input::{Control, ControlSet};

use crate::angles::normalize_degrees;
use crate::flight::FlightState;
use crate::ground::{ContactResult, resolve_ground_contact};
use crate::mission::{MissionEvent, evaluate_mission};
use crate::model::FlightModel;
use crate::status::StatusMessage;
use crate::world::WorldModel;

/// What a call to [`Simulation::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The reset control was held; the mission restarted and nothing was integrated.
    Reset,
    /// The aircraft has crashed; nothing changed.
    Frozen,
    /// The aircraft has landed; only the rollout speed decayed.
    RollingOut,
    /// Controls and physics were integrated.
    Advanced,
}

/// Everything the frame loop mutates: aircraft, scenario and mission cursor.
///
/// Owned by the frame driver and passed by `&mut` into [`step`](Self::step).
/// Presentation only ever borrows it immutably.
#[derive(Debug, Clone)]
pub struct Simulation {
    flight: FlightState,
    world: WorldModel,
    active_waypoint: usize,
    status: StatusMessage,
    model: FlightModel,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(WorldModel::default(), FlightModel::default())
    }
}

impl Simulation {
    /// A freshly reset simulation over `world`.
    #[must_use]
    pub fn new(world: WorldModel, model: FlightModel) -> Self {
        let mut sim = Self {
            flight: FlightState::default(),
            world,
            active_waypoint: 0,
            status: StatusMessage::Briefing,
            model,
        };
        sim.reset();
        sim
    }

    #[must_use]
    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    #[must_use]
    pub fn world(&self) -> &WorldModel {
        &self.world
    }

    /// Index of the next waypoint to capture; equals the waypoint count once
    /// all are reached.
    #[must_use]
    pub fn active_waypoint(&self) -> usize {
        self.active_waypoint
    }

    #[must_use]
    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    #[must_use]
    pub fn model(&self) -> &FlightModel {
        &self.model
    }

    /// Mutable aircraft access for scripted setups and tests.
    pub fn flight_mut(&mut self) -> &mut FlightState {
        &mut self.flight
    }

    /// Restore the default aircraft, rewind the mission and show the briefing.
    pub fn reset(&mut self) {
        self.flight = FlightState::default();
        self.active_waypoint = 0;
        self.world.clear_progress();
        self.status = StatusMessage::Briefing;
        info!("Mission reset");
    }

    /// Advance one frame of `dt` seconds with the controls held this frame.
    ///
    /// `dt` is clamped into `[0, model.max_dt]`; non-finite values integrate
    /// nothing.
    pub fn step(&mut self, dt: f64, controls: &ControlSet) -> StepOutcome {
        if controls.is_held(Control::Reset) {
            self.reset();
            return StepOutcome::Reset;
        }
        if self.flight.crashed {
            return StepOutcome::Frozen;
        }
        if self.flight.landed {
            self.roll_out();
            return StepOutcome::RollingOut;
        }

        let dt = self.model.sanitize_dt(dt);
        apply_controls(&mut self.flight, &self.model, dt, controls);
        integrate(&mut self.flight, &self.model, dt, controls);

        if self.flight.position.y <= 0.0 {
            match resolve_ground_contact(&mut self.flight, &self.world.runway, &self.model) {
                ContactResult::Landed => {
                    self.status = StatusMessage::Landed {
                        score: self.flight.score,
                    };
                    info!(score = self.flight.score, "Landed");
                }
                ContactResult::Crashed => {
                    self.status = StatusMessage::Crashed;
                    info!(
                        x = self.flight.position.x,
                        z = self.flight.position.z,
                        mission_complete = self.flight.completed_mission,
                        "Crashed"
                    );
                }
            }
        }

        if !self.flight.landed {
            self.run_mission();
        }

        StepOutcome::Advanced
    }

    fn run_mission(&mut self) {
        let event = evaluate_mission(
            &mut self.flight,
            &mut self.world,
            &mut self.active_waypoint,
            &self.model,
        );
        match event {
            Some(MissionEvent::WaypointCaptured { index, total }) => {
                let reached = index + 1;
                // A capture on the crash frame still scores, but the crash stays on screen.
                if !self.flight.crashed {
                    self.status = if reached < total {
                        StatusMessage::WaypointReached { reached, total }
                    } else {
                        StatusMessage::ReturnToBase
                    };
                }
                info!(waypoint = reached, total, score = self.flight.score, "Waypoint reached");
            }
            Some(MissionEvent::MissionCompleted) => {
                debug!("Mission complete, landing armed");
            }
            None => {}
        }
    }

    fn roll_out(&mut self) {
        let flight = &mut self.flight;
        if flight.speed == 0.0 {
            return;
        }
        flight.speed *= self.model.rollout_decay;
        if flight.speed < self.model.rollout_stop_speed {
            flight.speed = 0.0;
            info!("Aircraft stopped on the runway");
        }
    }
}

/// Control inputs followed by the attitude and throttle clamps.
fn apply_controls(flight: &mut FlightState, model: &FlightModel, dt: f64, controls: &ControlSet) {
    let attitude_step = model.attitude_rate * dt;
    let yaw_step = model.yaw_rate * dt;
    let throttle_step = model.throttle_rate * dt;

    // Opposite controls both apply and cancel.
    if controls.is_held(Control::PitchDown) {
        flight.pitch -= attitude_step;
    }
    if controls.is_held(Control::PitchUp) {
        flight.pitch += attitude_step;
    }
    if controls.is_held(Control::RollLeft) {
        flight.roll -= attitude_step;
    }
    if controls.is_held(Control::RollRight) {
        flight.roll += attitude_step;
    }
    if controls.is_held(Control::YawLeft) {
        flight.yaw -= yaw_step;
    }
    if controls.is_held(Control::YawRight) {
        flight.yaw += yaw_step;
    }
    if controls.is_held(Control::ThrottleUp) {
        flight.throttle += throttle_step;
    }
    if controls.is_held(Control::ThrottleDown) {
        flight.throttle -= throttle_step;
    }

    flight.throttle = flight.throttle.clamp(model.throttle_min, model.throttle_max);
    flight.pitch = flight.pitch.clamp(model.pitch_min, model.pitch_max);
    flight.roll = flight.roll.clamp(-model.roll_limit, model.roll_limit);
    flight.yaw = normalize_degrees(flight.yaw);
}

/// Speed, vertical speed, heading drift and position, in that order.
fn integrate(flight: &mut FlightState, model: &FlightModel, dt: f64, controls: &ControlSet) {
    let drag = model.drag_coefficient * flight.speed;
    let power = model.engine_power * flight.throttle;
    let brake = if controls.is_held(Control::Brake) {
        model.brake_force
    } else {
        0.0
    };
    flight.speed += (power - drag - brake) * dt;
    flight.speed = flight.speed.clamp(model.speed_min, model.speed_max);

    // Three separate updates, not one combined formula.
    let lift = model.lift(flight.speed, flight.pitch);
    flight.vertical_speed += lift * dt;
    flight.vertical_speed -= model.gravity * dt;
    flight.vertical_speed *= model.vertical_damping;

    let heading_drift =
        flight.roll * model.roll_drift * dt * (flight.speed / model.drift_reference_speed);
    flight.yaw = normalize_degrees(flight.yaw + heading_drift);

    let (sin, cos) = flight.yaw.to_radians().sin_cos();
    flight.position.x += cos * flight.speed * dt;
    flight.position.z += sin * flight.speed * dt;
    flight.position.y += flight.vertical_speed * dt;
}
