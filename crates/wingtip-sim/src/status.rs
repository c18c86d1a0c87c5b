//! Human-readable mission status line.

use std::fmt;

/// The status line shown to the pilot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Mission goal, shown after every reset.
    Briefing,
    /// A waypoint other than the last was captured.
    WaypointReached { reached: usize, total: usize },
    /// The last waypoint was captured.
    ReturnToBase,
    /// Successful landing.
    Landed { score: u64 },
    /// Terminal crash.
    Crashed,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Briefing => {
                write!(f, "Reach all waypoints, then return and land at the runway.")
            }
            Self::WaypointReached { reached, total } => write!(
                f,
                "Waypoint {reached}/{total} reached. Continue to the next marker."
            ),
            Self::ReturnToBase => write!(f, "All waypoints reached. Return to runway and land."),
            Self::Landed { score } => {
                write!(f, "Perfect landing! Mission complete with {score} score.")
            }
            Self::Crashed => write!(f, "Crash detected. Reset to restart the mission."),
        }
    }
}
