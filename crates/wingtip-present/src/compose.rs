//! Builds a [`Frame`] from a read-only view of the simulation.

use wingtip_sim::{FlightState, Simulation, StatusMessage, WorldModel};

use crate::frame::{Frame, Viewport};
use crate::horizon::draw_horizon;
use crate::hud::draw_hud;
use crate::minimap::draw_minimap;
use crate::overlay::{Banner, draw_overlay};

/// Borrowed simulation state needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub flight: &'a FlightState,
    pub world: &'a WorldModel,
    pub active_waypoint: usize,
    pub status: &'a StatusMessage,
    /// Speed below which a landed aircraft counts as stopped.
    pub stop_speed: f64,
}

impl<'a> From<&'a Simulation> for FrameView<'a> {
    fn from(sim: &'a Simulation) -> Self {
        Self {
            flight: sim.flight(),
            world: sim.world(),
            active_waypoint: sim.active_waypoint(),
            status: sim.status(),
            stop_speed: sim.model().rollout_stop_speed,
        }
    }
}

/// Horizon, tactical map, HUD text, then any banner overlay.
#[must_use]
pub fn compose_frame(view: &FrameView<'_>, viewport: Viewport) -> Frame {
    let mut frame = Frame::new(viewport);
    draw_horizon(&mut frame, viewport, view.flight.pitch, view.flight.roll);
    draw_minimap(&mut frame, viewport, view.flight, view.world);
    draw_hud(&mut frame, viewport, view.flight, view.world, view.active_waypoint);
    if let Some(banner) = Banner::for_flight(view.flight, view.stop_speed) {
        draw_overlay(&mut frame, viewport, banner);
    }
    frame
}
