//! Wingtip application shell.
//!
//! Owns the window and event loop and drives one simulation step plus one
//! composed frame per redraw.

pub mod error;
pub mod frame_clock;
pub mod window;

pub use error::AppError;
pub use frame_clock::FrameClock;
pub use window::{FlightApp, run};
