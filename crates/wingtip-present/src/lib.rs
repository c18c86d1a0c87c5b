//! Cockpit presentation.
//!
//! [`compose_frame`] turns a borrowed [`FrameView`] into a backend-neutral
//! [`Frame`] draw list; [`Rasterizer`] paints it into RGBA pixels. Nothing in
//! here mutates the simulation.

pub mod compose;
pub mod frame;
pub mod horizon;
pub mod hud;
pub mod minimap;
pub mod overlay;
pub mod palette;
pub mod raster;

pub use compose::{FrameView, compose_frame};
pub use frame::{Color, Frame, Primitive, Rect, TextAlign, Viewport};
pub use hud::{Readout, Severity, WaypointCue, format_title, gauge_severity, readouts};
pub use overlay::Banner;
pub use raster::{RasterError, Rasterizer, rasterize};
