//! Cockpit colours.

use crate::frame::Color;

pub const SKY: Color = Color::hex(0x1f4b99);
pub const GROUND: Color = Color::hex(0x4b3423);
pub const HORIZON_LINE: Color = Color::hex(0xf8fafc);
pub const PITCH_LADDER: Color = Color::hex(0xcbd5e1);
pub const BORESIGHT: Color = Color::hex(0xe2e8f0);

pub const MAP_BORDER: Color = Color::hex(0x475569);
pub const MAP_RUNWAY: Color = Color::hex(0xe5e7eb);
pub const MAP_LABEL: Color = Color::hex(0xe2e8f0);
pub const MAP_CAPTION: Color = Color::hex(0xcbd5e1);
pub const AIRCRAFT: Color = Color::hex(0x38bdf8);
pub const WAYPOINT_REACHED: Color = Color::hex(0x34d399);
pub const WAYPOINT_PENDING: Color = Color::hex(0xfbbf24);

pub const HUD_TEXT: Color = Color::hex(0x94a3b8);
pub const HUD_TARGET: Color = Color::hex(0xf8fafc);

pub const GAUGE_OK: Color = Color::hex(0xe2e8f0);
pub const GAUGE_WARN: Color = Color::hex(0xfbbf24);
pub const GAUGE_DANGER: Color = Color::hex(0xf43f5e);

pub const CRASH: Color = Color::hex(0xf43f5e);
pub const MISSION_COMPLETE: Color = Color::hex(0x34d399);

/// Translucent fills need a runtime alpha conversion.
#[must_use]
pub fn map_panel() -> Color {
    Color::rgba(3, 7, 18, 0.75)
}

#[must_use]
pub fn overlay_shade() -> Color {
    Color::rgba(2, 6, 23, 0.75)
}
