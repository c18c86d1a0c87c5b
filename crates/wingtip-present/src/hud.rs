//! Cockpit text: flight data column, next-waypoint cue, readouts and the
//! compact window-title line.

use glam::Vec2;
use wingtip_sim::angles::normalize_degrees;
use wingtip_sim::{FlightState, StatusMessage, WorldModel};

use crate::frame::{Color, Frame, Viewport};
use crate::palette;

const HUD_FONT: f32 = 16.0;
const LINE_STEP: f32 = 22.0;
const LEFT_COLUMN_X: f32 = 32.0;
const RIGHT_COLUMN_INSET: f32 = 240.0;
const FIRST_LINE_Y: f32 = 38.0;

/// Readout health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warn,
    Danger,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Ok => palette::GAUGE_OK,
            Self::Warn => palette::GAUGE_WARN,
            Self::Danger => palette::GAUGE_DANGER,
        }
    }
}

/// Classify `value` against its thresholds.
///
/// Normal gauges are bad when low: below `danger` (or above 1000) is
/// danger, below `warning` is warn. Inverted gauges are bad when high.
#[must_use]
pub fn gauge_severity(value: f64, warning: f64, danger: f64, inverted: bool) -> Severity {
    if inverted {
        if value > danger {
            Severity::Danger
        } else if value > warning {
            Severity::Warn
        } else {
            Severity::Ok
        }
    } else if value < danger || value > 1000.0 {
        Severity::Danger
    } else if value < warning {
        Severity::Warn
    } else {
        Severity::Ok
    }
}

/// One labelled instrument value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    pub label: &'static str,
    pub value: String,
    pub severity: Severity,
}

/// The instrument list in display order.
#[must_use]
pub fn readouts(flight: &FlightState) -> Vec<Readout> {
    let throttle_pct = flight.throttle * 100.0;
    vec![
        Readout {
            label: "Airspeed",
            value: format!("{:.0} kt", flight.speed),
            severity: gauge_severity(flight.speed, 75.0, 58.0, false),
        },
        Readout {
            label: "Altitude",
            value: format!("{:.0} ft", flight.altitude().max(0.0)),
            severity: gauge_severity(flight.altitude(), 90.0, 25.0, false),
        },
        Readout {
            label: "Pitch",
            value: format!("{:.1}°", flight.pitch),
            severity: gauge_severity(flight.pitch.abs(), 14.0, 20.0, true),
        },
        Readout {
            label: "Roll",
            value: format!("{:.1}°", flight.roll),
            severity: gauge_severity(flight.roll.abs(), 30.0, 42.0, true),
        },
        Readout {
            label: "Throttle",
            value: format!("{throttle_pct:.0}%"),
            severity: gauge_severity(throttle_pct, 25.0, 12.0, false),
        },
        Readout {
            label: "Vertical Speed",
            value: format!("{:.0} fpm", flight.vertical_speed),
            severity: gauge_severity(flight.vertical_speed.abs(), 900.0, 1500.0, true),
        },
        Readout {
            label: "Mission Score",
            value: flight.score.to_string(),
            severity: Severity::Ok,
        },
    ]
}

/// Navigation cue toward the active waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaypointCue {
    /// 1-based waypoint number.
    pub number: usize,
    /// Degrees in `[0, 360)`, same convention as heading.
    pub bearing: f64,
    /// Planar distance in world units.
    pub distance: f64,
    pub target_altitude: f64,
}

impl WaypointCue {
    /// `None` once every waypoint is reached.
    #[must_use]
    pub fn toward(flight: &FlightState, world: &WorldModel, active_waypoint: usize) -> Option<Self> {
        let wp = world.waypoints.get(active_waypoint)?;
        let delta = wp.planar() - flight.planar();
        Some(Self {
            number: active_waypoint + 1,
            bearing: normalize_degrees(delta.y.atan2(delta.x).to_degrees()),
            distance: delta.length(),
            target_altitude: wp.altitude,
        })
    }

    /// Distance in the nautical-mile display unit (100 world units each).
    #[must_use]
    pub fn distance_nm(&self) -> f64 {
        self.distance / 100.0
    }

    #[must_use]
    pub fn lines(&self) -> [String; 4] {
        [
            format!("NEXT WP {}", self.number),
            format!("BRG {:.0}°", self.bearing),
            format!("DST {:.1} nm", self.distance_nm()),
            format!("TGT ALT {} ft", self.target_altitude),
        ]
    }
}

/// Flight data column, top to bottom.
#[must_use]
pub fn flight_data_lines(flight: &FlightState) -> [String; 6] {
    [
        format!("SPD {:.0} kt", flight.speed),
        format!("ALT {:.0} ft", flight.altitude().max(0.0)),
        format!("HDG {:.0}°", flight.yaw),
        format!("V/S {:.0} fpm", flight.vertical_speed),
        format!("THR {:.0}%", flight.throttle * 100.0),
        format!("SCR {}", flight.score),
    ]
}

/// Compact HUD for the window title bar.
///
/// Example: `SPD 78 kt | ALT 25 ft | HDG 090° | THR 55% | SCR 0 | Reach all waypoints, ...`
#[must_use]
pub fn format_title(flight: &FlightState, status: &StatusMessage) -> String {
    format!(
        "SPD {:.0} kt | ALT {:.0} ft | HDG {:03.0}\u{00b0} | THR {:.0}% | SCR {} | {}",
        flight.speed,
        flight.altitude().max(0.0),
        flight.yaw,
        flight.throttle * 100.0,
        flight.score,
        status,
    )
}

pub fn draw_hud(
    frame: &mut Frame,
    viewport: Viewport,
    flight: &FlightState,
    world: &WorldModel,
    active_waypoint: usize,
) {
    let mut y = FIRST_LINE_Y;
    for line in flight_data_lines(flight) {
        frame.text(Vec2::new(LEFT_COLUMN_X, y), line, HUD_FONT, palette::HUD_TEXT);
        y += LINE_STEP;
    }

    let right_x = viewport.width - RIGHT_COLUMN_INSET;
    let mut y = FIRST_LINE_Y;
    if let Some(cue) = WaypointCue::toward(flight, world, active_waypoint) {
        for line in cue.lines() {
            frame.text(Vec2::new(right_x, y), line, HUD_FONT, palette::HUD_TARGET);
            y += LINE_STEP;
        }
        y += LINE_STEP;
    }

    for readout in readouts(flight) {
        frame.text(
            Vec2::new(right_x, y),
            format!("{} {}", readout.label, readout.value),
            13.0,
            readout.severity.color(),
        );
        y += 18.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_gauge_severity_normal() {
        assert_eq!(gauge_severity(80.0, 75.0, 58.0, false), Severity::Ok);
        assert_eq!(gauge_severity(70.0, 75.0, 58.0, false), Severity::Warn);
        assert_eq!(gauge_severity(57.0, 75.0, 58.0, false), Severity::Danger);
        assert_eq!(gauge_severity(1001.0, 90.0, 25.0, false), Severity::Danger);
        assert_eq!(gauge_severity(1000.0, 90.0, 25.0, false), Severity::Ok);
    }

    #[test]
    fn test_gauge_severity_inverted() {
        assert_eq!(gauge_severity(10.0, 14.0, 20.0, true), Severity::Ok);
        assert_eq!(gauge_severity(15.0, 14.0, 20.0, true), Severity::Warn);
        assert_eq!(gauge_severity(21.0, 14.0, 20.0, true), Severity::Danger);
        // No upper cap for inverted gauges beyond the danger threshold.
        assert_eq!(gauge_severity(14.0, 14.0, 20.0, true), Severity::Ok);
    }

    #[test]
    fn test_default_readouts() {
        let list = readouts(&FlightState::default());
        let find = |label: &str| list.iter().find(|r| r.label == label).cloned().unwrap();

        assert_eq!(list.len(), 7);
        assert_eq!(find("Airspeed").value, "78 kt");
        assert_eq!(find("Airspeed").severity, Severity::Ok);
        assert_eq!(find("Altitude").value, "25 ft");
        assert_eq!(find("Altitude").severity, Severity::Warn);
        assert_eq!(find("Pitch").value, "1.0°");
        assert_eq!(find("Throttle").value, "55%");
        assert_eq!(find("Mission Score").severity, Severity::Ok);
    }

    #[test]
    fn test_high_altitude_reads_danger() {
        let flight = FlightState {
            position: DVec3::new(0.0, 1500.0, 0.0),
            ..FlightState::default()
        };
        let alt = readouts(&flight).remove(1);
        assert_eq!(alt.label, "Altitude");
        assert_eq!(alt.severity, Severity::Danger);
    }

    #[test]
    fn test_waypoint_cue_bearing_and_distance() {
        let flight = FlightState {
            position: DVec3::new(0.0, 100.0, 0.0),
            ..FlightState::default()
        };
        let world = WorldModel::default();

        // First waypoint at (3500, -1800): north-east of the origin in -z.
        let cue = WaypointCue::toward(&flight, &world, 0).unwrap();
        assert_eq!(cue.number, 1);
        let expected = normalize_degrees((-1800.0_f64).atan2(3500.0).to_degrees());
        assert!((cue.bearing - expected).abs() < 1e-9);
        assert!(cue.bearing > 270.0);
        assert!((cue.distance - 3500.0_f64.hypot(1800.0)).abs() < 1e-9);
        assert_eq!(cue.lines()[2], format!("DST {:.1} nm", cue.distance / 100.0));
        assert_eq!(cue.lines()[3], "TGT ALT 1500 ft");

        assert!(WaypointCue::toward(&flight, &world, 3).is_none());
    }

    #[test]
    fn test_flight_data_lines() {
        let lines = flight_data_lines(&FlightState::default());
        assert_eq!(
            lines,
            [
                "SPD 78 kt",
                "ALT 25 ft",
                "HDG 90°",
                "V/S 0 fpm",
                "THR 55%",
                "SCR 0"
            ]
        );
    }

    #[test]
    fn test_altitude_text_never_negative() {
        let flight = FlightState {
            position: DVec3::new(0.0, -3.0, 0.0),
            ..FlightState::default()
        };
        assert_eq!(flight_data_lines(&flight)[1], "ALT 0 ft");
    }

    #[test]
    fn test_format_title() {
        let title = format_title(&FlightState::default(), &StatusMessage::Crashed);
        assert_eq!(
            title,
            "SPD 78 kt | ALT 25 ft | HDG 090° | THR 55% | SCR 0 | \
             Crash detected. Reset to restart the mission."
        );
    }

    #[test]
    fn test_hud_omits_cue_when_mission_done() {
        let vp = Viewport::new(1280, 720);
        let world = WorldModel::default();

        let mut frame = Frame::new(vp);
        draw_hud(&mut frame, vp, &FlightState::default(), &world, 0);
        assert!(frame.texts().any(|t| t == "NEXT WP 1"));

        let mut frame = Frame::new(vp);
        draw_hud(&mut frame, vp, &FlightState::default(), &world, 3);
        assert!(!frame.texts().any(|t| t.starts_with("NEXT WP")));
        assert!(frame.texts().any(|t| t == "SCR 0"));
    }
}
