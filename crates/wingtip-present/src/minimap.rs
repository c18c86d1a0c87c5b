//! Top-down tactical map in the lower-left corner.

use glam::Vec2;
use wingtip_sim::{FlightState, WorldModel};

use crate::frame::{Frame, Primitive, Rect, TextAlign, Viewport};
use crate::palette;

/// World units per map pixel.
pub const MAP_SCALE: f32 = 35.0;
pub const MAP_WIDTH: f32 = 310.0;
pub const MAP_HEIGHT: f32 = 190.0;
const MAP_MARGIN_LEFT: f32 = 30.0;
const MAP_MARGIN_BOTTOM: f32 = 230.0;
const WAYPOINT_RADIUS: f32 = 6.0;

/// Map panel rectangle for a viewport.
#[must_use]
pub fn map_rect(viewport: Viewport) -> Rect {
    Rect::new(
        MAP_MARGIN_LEFT,
        viewport.height - MAP_MARGIN_BOTTOM,
        MAP_WIDTH,
        MAP_HEIGHT,
    )
}

/// Project a ground-plane point onto the map; world +x is right, +z is down.
#[must_use]
pub fn world_to_map(x: f64, z: f64, centre: Vec2) -> Vec2 {
    centre + Vec2::new(x as f32, z as f32) / MAP_SCALE
}

/// Aircraft arrow outline pointing along +x before rotation.
const ARROW: [Vec2; 4] = [
    Vec2::new(10.0, 0.0),
    Vec2::new(-8.0, 6.0),
    Vec2::new(-4.0, 0.0),
    Vec2::new(-8.0, -6.0),
];

pub fn draw_minimap(frame: &mut Frame, viewport: Viewport, flight: &FlightState, world: &WorldModel) {
    let panel = map_rect(viewport);
    let centre = panel.centre();

    frame.push(Primitive::FillRect {
        rect: panel,
        color: palette::map_panel(),
    });
    frame.push(Primitive::StrokeRect {
        rect: panel,
        width: 1.0,
        color: palette::MAP_BORDER,
    });

    let runway = &world.runway;
    let half = runway.length / 2.0;
    frame.line(
        world_to_map(runway.x - half, runway.z, centre),
        world_to_map(runway.x + half, runway.z, centre),
        4.0,
        palette::MAP_RUNWAY,
    );

    for (i, wp) in world.waypoints.iter().enumerate() {
        let p = world_to_map(wp.x, wp.z, centre);
        frame.push(Primitive::Circle {
            centre: p,
            radius: WAYPOINT_RADIUS,
            color: if wp.reached {
                palette::WAYPOINT_REACHED
            } else {
                palette::WAYPOINT_PENDING
            },
        });
        frame.text(p + Vec2::new(8.0, -8.0), (i + 1).to_string(), 12.0, palette::MAP_LABEL);
    }

    let nose = Vec2::from_angle((flight.yaw as f32).to_radians());
    let at = world_to_map(flight.position.x, flight.position.z, centre);
    frame.push(Primitive::FillPolygon {
        points: ARROW.iter().map(|p| at + nose.rotate(*p)).collect(),
        color: palette::AIRCRAFT,
    });

    frame.push(Primitive::Text {
        position: Vec2::new(panel.x + 8.0, panel.y + 18.0),
        text: "Tactical Map".to_owned(),
        size: 13.0,
        align: TextAlign::Start,
        color: palette::MAP_CAPTION,
    });
}
