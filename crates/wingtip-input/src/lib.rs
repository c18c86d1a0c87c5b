//! Keyboard input mapped onto flight controls.
//!
//! Window events feed a [`KeyboardState`]; once per frame an [`InputMap`]
//! turns the held keys into an immutable [`ControlSet`] snapshot, which is
//! all the simulation ever sees.

pub mod bindings;
pub mod controls;
pub mod keyboard;

pub use bindings::{Conflict, InputMap};
pub use controls::{Control, ControlSet};
pub use keyboard::{KeyboardState, RawKeyEvent};
