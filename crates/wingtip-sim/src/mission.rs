//! Waypoint sequencing and scoring.

use crate::flight::FlightState;
use crate::model::FlightModel;
use crate::world::WorldModel;

/// A mission transition produced by [`evaluate_mission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionEvent {
    /// `waypoints[index]` was captured; `total` waypoints in the mission.
    WaypointCaptured { index: usize, total: usize },
    /// Every waypoint was already captured; landing is now allowed.
    MissionCompleted,
}

/// Advance the mission by one frame.
///
/// Only `world.waypoints[*active_waypoint]` can be captured, so waypoints are
/// always reached in order. Once the cursor has passed the last waypoint the
/// mission completes on the next call. Independently, every call made while
/// cruising above `cruise_min_altitude` faster than `cruise_min_speed` adds
/// `cruise_score`.
pub fn evaluate_mission(
    state: &mut FlightState,
    world: &mut WorldModel,
    active_waypoint: &mut usize,
    model: &FlightModel,
) -> Option<MissionEvent> {
    let total = world.waypoints.len();
    let mut event = None;

    if let Some(wp) = world.waypoints.get_mut(*active_waypoint) {
        let distance = state.planar().distance(wp.planar());
        let altitude_error = (state.altitude() - wp.altitude).abs();

        if distance < model.capture_radius && altitude_error < model.capture_altitude_tolerance {
            wp.reached = true;
            let index = *active_waypoint;
            *active_waypoint += 1;
            state.score = state.score.saturating_add(model.waypoint_score);
            event = Some(MissionEvent::WaypointCaptured { index, total });
        }
    } else if !state.completed_mission {
        state.completed_mission = true;
        event = Some(MissionEvent::MissionCompleted);
    }

    // Frame-rate dependent: faster displays earn the bonus more often.
    if state.altitude() > model.cruise_min_altitude && state.speed > model.cruise_min_speed {
        state.score = state.score.saturating_add(model.cruise_score);
    }

    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Waypoint;
    use glam::DVec3;

    fn at(x: f64, y: f64, z: f64, speed: f64) -> FlightState {
        FlightState {
            position: DVec3::new(x, y, z),
            speed,
            ..FlightState::default()
        }
    }

    #[test]
    fn test_capture_inside_tolerances() {
        let mut world = WorldModel::default();
        let mut cursor = 0;
        // 249 units away planar, 259 below the target altitude; slow enough
        // that no cruise bonus is added.
        let mut state = at(3500.0 - 249.0, 1500.0 - 259.0, -1800.0, 60.0);

        let event = evaluate_mission(&mut state, &mut world, &mut cursor, &FlightModel::default());

        assert_eq!(
            event,
            Some(MissionEvent::WaypointCaptured { index: 0, total: 3 })
        );
        assert!(world.waypoints[0].reached);
        assert_eq!(cursor, 1);
        assert_eq!(state.score, 300);
    }

    #[test]
    fn test_no_capture_on_boundary() {
        let mut world = WorldModel::default();
        let mut cursor = 0;
        let model = FlightModel::default();

        let mut state = at(3500.0 - 250.0, 1500.0, -1800.0, 60.0);
        assert_eq!(evaluate_mission(&mut state, &mut world, &mut cursor, &model), None);

        let mut state = at(3500.0, 1500.0 + 260.0, -1800.0, 60.0);
        assert_eq!(evaluate_mission(&mut state, &mut world, &mut cursor, &model), None);

        assert_eq!(cursor, 0);
        assert!(!world.waypoints[0].reached);
    }

    #[test]
    fn test_waypoints_captured_in_order_only() {
        let mut world = WorldModel::default();
        let mut cursor = 0;
        let model = FlightModel::default();

        // Sitting exactly on waypoint 2 while waypoint 1 is still active.
        let mut state = at(6200.0, 1900.0, 900.0, 60.0);
        assert_eq!(evaluate_mission(&mut state, &mut world, &mut cursor, &model), None);
        assert!(!world.waypoints[1].reached);
        assert_eq!(cursor, 0);
    }

    #[test]
    fn test_last_capture_then_silent_completion() {
        let mut world = WorldModel {
            waypoints: vec![Waypoint::new(0.0, 0.0, 500.0)],
            ..WorldModel::default()
        };
        let mut cursor = 0;
        let model = FlightModel::default();
        let mut state = at(10.0, 500.0, 10.0, 60.0);

        assert_eq!(
            evaluate_mission(&mut state, &mut world, &mut cursor, &model),
            Some(MissionEvent::WaypointCaptured { index: 0, total: 1 })
        );
        assert!(!state.completed_mission);

        assert_eq!(
            evaluate_mission(&mut state, &mut world, &mut cursor, &model),
            Some(MissionEvent::MissionCompleted)
        );
        assert!(state.completed_mission);

        assert_eq!(evaluate_mission(&mut state, &mut world, &mut cursor, &model), None);
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_empty_mission_completes_immediately() {
        let mut world = WorldModel {
            waypoints: Vec::new(),
            ..WorldModel::default()
        };
        let mut cursor = 0;
        let mut state = at(0.0, 100.0, 0.0, 60.0);
        assert_eq!(
            evaluate_mission(&mut state, &mut world, &mut cursor, &FlightModel::default()),
            Some(MissionEvent::MissionCompleted)
        );
    }

    #[test]
    fn test_cruise_bonus() {
        let mut world = WorldModel::default();
        let mut cursor = 0;
        let model = FlightModel::default();

        let mut cruising = at(0.0, 51.0, 0.0, 66.0);
        evaluate_mission(&mut cruising, &mut world, &mut cursor, &model);
        assert_eq!(cruising.score, 1);

        let mut low = at(0.0, 50.0, 0.0, 200.0);
        evaluate_mission(&mut low, &mut world, &mut cursor, &model);
        assert_eq!(low.score, 0);

        let mut slow = at(0.0, 500.0, 0.0, 65.0);
        evaluate_mission(&mut slow, &mut world, &mut cursor, &model);
        assert_eq!(slow.score, 0);
    }

    #[test]
    fn test_capture_and_cruise_bonus_stack() {
        let mut world = WorldModel::default();
        let mut cursor = 0;
        let mut state = at(3500.0, 1500.0, -1800.0, 120.0);
        evaluate_mission(&mut state, &mut world, &mut cursor, &FlightModel::default());
        assert_eq!(state.score, 301);
    }
}
