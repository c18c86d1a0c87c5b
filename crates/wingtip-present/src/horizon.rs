//! Artificial horizon: sky, ground, pitch ladder and boresight.

use glam::Vec2;

use crate::frame::{Frame, Primitive, Viewport};
use crate::palette;

/// Screen pixels per degree of pitch for the horizon offset.
pub const PITCH_PX_PER_DEG: f32 = 3.0;
/// Screen pixels per degree between pitch ladder rungs.
pub const LADDER_PX_PER_DEG: f32 = 6.0;

/// Rotation by roll about the viewport centre.
#[derive(Debug, Clone, Copy)]
struct RollFrame {
    centre: Vec2,
    rotation: Vec2,
}

impl RollFrame {
    fn new(centre: Vec2, roll_deg: f64) -> Self {
        Self {
            centre,
            rotation: Vec2::from_angle((roll_deg as f32).to_radians()),
        }
    }

    fn to_screen(self, local: Vec2) -> Vec2 {
        self.centre + self.rotation.rotate(local)
    }

    fn quad(self, x: f32, y: f32, w: f32, h: f32) -> Vec<Vec2> {
        [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ]
        .into_iter()
        .map(|p| self.to_screen(p))
        .collect()
    }
}

/// Horizon offset in pixels for a pitch in degrees.
#[must_use]
pub fn pitch_offset(pitch_deg: f64) -> f32 {
    pitch_deg as f32 * PITCH_PX_PER_DEG
}

/// Pitch ladder rungs as `(degrees, half_length)`; the zero rung is the horizon itself.
pub fn ladder_rungs() -> impl Iterator<Item = (i32, f32)> {
    (-30..=30)
        .step_by(5)
        .filter(|deg| *deg != 0)
        .map(|deg| (deg, if deg % 10 == 0 { 120.0 } else { 60.0 }))
}

pub fn draw_horizon(frame: &mut Frame, viewport: Viewport, pitch_deg: f64, roll_deg: f64) {
    let w = viewport.width;
    let h = viewport.height;
    let roll = RollFrame::new(viewport.centre(), roll_deg);
    let offset = pitch_offset(pitch_deg);

    frame.push(Primitive::FillPolygon {
        points: roll.quad(-w, -h * 2.0 + offset, w * 2.0, h * 2.0),
        color: palette::SKY,
    });
    frame.push(Primitive::FillPolygon {
        points: roll.quad(-w, offset, w * 2.0, h * 2.0),
        color: palette::GROUND,
    });
    frame.line(
        roll.to_screen(Vec2::new(-w, offset)),
        roll.to_screen(Vec2::new(w, offset)),
        3.0,
        palette::HORIZON_LINE,
    );

    for (deg, half) in ladder_rungs() {
        let y = offset + deg as f32 * LADDER_PX_PER_DEG;
        frame.line(
            roll.to_screen(Vec2::new(-half, y)),
            roll.to_screen(Vec2::new(half, y)),
            2.0,
            palette::PITCH_LADDER,
        );
    }

    // Boresight stays level with the airframe.
    let c = viewport.centre();
    frame.line(c + Vec2::new(-45.0, 0.0), c + Vec2::new(-10.0, 0.0), 2.0, palette::BORESIGHT);
    frame.line(c + Vec2::new(10.0, 0.0), c + Vec2::new(45.0, 0.0), 2.0, palette::BORESIGHT);
    frame.line(c + Vec2::new(0.0, -10.0), c + Vec2::new(0.0, 20.0), 2.0, palette::BORESIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizon_line(frame: &Frame) -> (Vec2, Vec2) {
        frame
            .primitives()
            .iter()
            .find_map(|p| match p {
                Primitive::Line {
                    from, to, color, ..
                } if *color == palette::HORIZON_LINE => Some((*from, *to)),
                _ => None,
            })
            .expect("horizon line drawn")
    }

    #[test]
    fn test_ladder_rungs() {
        let rungs: Vec<_> = ladder_rungs().collect();
        assert_eq!(rungs.len(), 12);
        assert!(rungs.iter().all(|(deg, _)| *deg != 0));
        assert!(rungs.contains(&(-30, 120.0)));
        assert!(rungs.contains(&(5, 60.0)));
        assert!(rungs.contains(&(20, 120.0)));
    }

    #[test]
    fn test_level_flight_horizon_through_centre() {
        let vp = Viewport::new(800, 600);
        let mut frame = Frame::new(vp);
        draw_horizon(&mut frame, vp, 0.0, 0.0);
        let (from, to) = horizon_line(&frame);
        assert!((from.y - 300.0).abs() < 1e-3);
        assert!((to.y - 300.0).abs() < 1e-3);
        assert!((from.x + 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_pitch_moves_horizon_down() {
        let vp = Viewport::new(800, 600);
        let mut frame = Frame::new(vp);
        draw_horizon(&mut frame, vp, 10.0, 0.0);
        let (from, _) = horizon_line(&frame);
        assert!((from.y - 330.0).abs() < 1e-3);
    }

    #[test]
    fn test_roll_rotates_horizon() {
        let vp = Viewport::new(800, 600);
        let mut frame = Frame::new(vp);
        draw_horizon(&mut frame, vp, 0.0, 90.0);
        let (from, to) = horizon_line(&frame);
        // Rolled 90 degrees the horizon becomes vertical through the centre.
        assert!((from.x - 400.0).abs() < 1e-2);
        assert!((to.x - 400.0).abs() < 1e-2);
        assert!((from.y - to.y).abs() > 1000.0);
    }

    #[test]
    fn test_draw_order_sky_ground_line() {
        let vp = Viewport::new(320, 240);
        let mut frame = Frame::new(vp);
        draw_horizon(&mut frame, vp, 0.0, 0.0);
        let prims = frame.primitives();
        assert!(matches!(&prims[0], Primitive::FillPolygon { color, .. } if *color == palette::SKY));
        assert!(
            matches!(&prims[1], Primitive::FillPolygon { color, .. } if *color == palette::GROUND)
        );
        // sky, ground, horizon, 12 rungs, 3 boresight strokes
        assert_eq!(frame.len(), 2 + 1 + 12 + 3);
    }
}
