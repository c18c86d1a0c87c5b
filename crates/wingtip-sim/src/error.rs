//! Scenario loading errors.

use std::path::PathBuf;

/// Errors raised while loading or validating a scenario file.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("failed to read scenario {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scenario file is not valid RON for a [`ScenarioFile`](crate::ScenarioFile).
    #[error("failed to parse scenario: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// Runway dimensions or pose are unusable.
    #[error("invalid runway: {0}")]
    InvalidRunway(String),

    /// A waypoint has a non-finite coordinate.
    #[error("invalid waypoint {index}: {reason}")]
    InvalidWaypoint { index: usize, reason: String },
}
