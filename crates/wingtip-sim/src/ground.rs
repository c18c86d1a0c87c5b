//! Touchdown resolution: landing or crash.

use crate::angles::heading_error;
use crate::flight::FlightState;
use crate::model::FlightModel;
use crate::world::Runway;

/// How a ground contact was resolved. Both outcomes are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactResult {
    Landed,
    Crashed,
}

/// Resolve a ground contact. Call only when `state.position.y <= 0`.
///
/// A landing needs all of: on the runway footprint, slower than
/// `landing_max_speed`, heading within `landing_max_heading_error` of the
/// runway, and the mission already complete. Anything else is a crash.
pub fn resolve_ground_contact(
    state: &mut FlightState,
    runway: &Runway,
    model: &FlightModel,
) -> ContactResult {
    let on_runway = runway.contains(state.position.x, state.position.z);
    let aligned = heading_error(state.yaw, runway.heading) < model.landing_max_heading_error;
    let slow_enough = state.speed < model.landing_max_speed;

    state.position.y = 0.0;

    if on_runway && slow_enough && aligned && state.completed_mission {
        state.landed = true;
        state.vertical_speed = 0.0;
        state.speed *= model.rollout_decay;
        if state.speed < model.rollout_stop_speed {
            state.speed = 0.0;
        }
        ContactResult::Landed
    } else {
        state.crashed = true;
        state.speed = 0.0;
        ContactResult::Crashed
    }
}
