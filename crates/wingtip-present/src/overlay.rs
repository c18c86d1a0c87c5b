//! End-of-mission banners.

use wingtip_sim::FlightState;

use crate::frame::{Color, Frame, Primitive, Rect, TextAlign, Viewport};
use crate::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Crash,
    MissionComplete,
}

impl Banner {
    /// The banner for `flight`, if any. A crash takes precedence.
    #[must_use]
    pub fn for_flight(flight: &FlightState, stop_speed: f64) -> Option<Self> {
        if flight.crashed {
            Some(Self::Crash)
        } else if flight.mission_accomplished(stop_speed) {
            Some(Self::MissionComplete)
        } else {
            None
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Crash => "CRASH",
            Self::MissionComplete => "MISSION COMPLETE",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Crash => palette::CRASH,
            Self::MissionComplete => palette::MISSION_COMPLETE,
        }
    }
}

pub fn draw_overlay(frame: &mut Frame, viewport: Viewport, banner: Banner) {
    frame.push(Primitive::FillRect {
        rect: Rect::new(0.0, 0.0, viewport.width, viewport.height),
        color: palette::overlay_shade(),
    });
    frame.push(Primitive::Text {
        position: viewport.centre(),
        text: banner.text().to_owned(),
        size: 64.0,
        align: TextAlign::Centre,
        color: banner.color(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_banner_in_flight() {
        assert_eq!(Banner::for_flight(&FlightState::default(), 1.0), None);
    }

    #[test]
    fn test_crash_banner() {
        let flight = FlightState {
            crashed: true,
            ..FlightState::default()
        };
        assert_eq!(Banner::for_flight(&flight, 1.0), Some(Banner::Crash));
    }

    #[test]
    fn test_mission_complete_waits_for_stop() {
        let mut flight = FlightState {
            landed: true,
            completed_mission: true,
            speed: 20.0,
            ..FlightState::default()
        };
        assert_eq!(Banner::for_flight(&flight, 1.0), None);
        flight.speed = 0.0;
        assert_eq!(Banner::for_flight(&flight, 1.0), Some(Banner::MissionComplete));
    }

    #[test]
    fn test_overlay_covers_viewport() {
        let vp = Viewport::new(640, 480);
        let mut frame = Frame::new(vp);
        draw_overlay(&mut frame, vp, Banner::Crash);
        assert_eq!(
            frame.primitives()[0],
            Primitive::FillRect {
                rect: Rect::new(0.0, 0.0, 640.0, 480.0),
                color: palette::overlay_shade(),
            }
        );
        assert_eq!(frame.texts().collect::<Vec<_>>(), ["CRASH"]);
    }
}
