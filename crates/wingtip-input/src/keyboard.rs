//! Keyboard tracker fed by winit events.
//!
//! [`KeyboardState`] records which physical keys are held and which went
//! down since the last [`clear_transients`](KeyboardState::clear_transients).
//! Physical key codes keep the default WASD layout in place on any keyboard
//! layout.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Minimal description of a key event.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat event.
    pub repeat: bool,
}

/// Held and just-pressed physical keys.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<PhysicalKey>,
    just_pressed: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// Creates a tracker with no keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`].
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    /// Processes a [`RawKeyEvent`]. Repeats are ignored.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                if self.pressed.insert(event.key) {
                    self.just_pressed.insert(event.key);
                }
            }
            ElementState::Released => {
                self.pressed.remove(&event.key);
            }
        }
    }

    /// Returns `true` while `code` is held down.
    #[must_use]
    pub fn is_held(&self, code: KeyCode) -> bool {
        self.pressed.contains(&PhysicalKey::Code(code))
    }

    /// Returns `true` if `code` went down since the last transient clear.
    #[must_use]
    pub fn just_pressed(&self, code: KeyCode) -> bool {
        self.just_pressed.contains(&PhysicalKey::Code(code))
    }

    /// Drops every held key, e.g. when the window loses focus and release
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }

    /// Clears the just-pressed set. Call at the end of each frame.
    pub fn clear_transients(&mut self) {
        self.just_pressed.clear();
    }
}
