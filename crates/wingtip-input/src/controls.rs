//! Logical flight controls and the per-frame held-control snapshot.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A logical control the pilot can hold.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Control {
    /// Nose up (pitch increases).
    PitchUp,
    /// Nose down (pitch decreases).
    PitchDown,
    /// Bank left (roll decreases).
    RollLeft,
    /// Bank right (roll increases).
    RollRight,
    /// Rudder left (yaw decreases).
    YawLeft,
    /// Rudder right (yaw increases).
    YawRight,
    /// Advance the throttle.
    ThrottleUp,
    /// Retard the throttle.
    ThrottleDown,
    /// Wheel/air brake.
    Brake,
    /// Restart the mission.
    Reset,
}

impl Control {
    /// Every control, in a stable order.
    pub const ALL: [Control; 10] = [
        Control::PitchUp,
        Control::PitchDown,
        Control::RollLeft,
        Control::RollRight,
        Control::YawLeft,
        Control::YawRight,
        Control::ThrottleUp,
        Control::ThrottleDown,
        Control::Brake,
        Control::Reset,
    ];
}

/// Immutable snapshot of the controls held at a frame boundary.
///
/// Captured once per frame and passed by reference into the simulation step,
/// so key events arriving mid-frame can never be observed half-applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlSet {
    held: HashSet<Control>,
}

impl ControlSet {
    /// A snapshot with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `control` was held when the snapshot was taken.
    #[must_use]
    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Number of held controls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// True when no control is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Held controls in [`Control::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Control> + '_ {
        Control::ALL.into_iter().filter(|c| self.held.contains(c))
    }
}

impl FromIterator<Control> for ControlSet {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Control; N]> for ControlSet {
    fn from(controls: [Control; N]) -> Self {
        controls.into_iter().collect()
    }
}
