//! Variable-timestep frame clock.
//!
//! Each frame advances the simulation by the wall-clock time since the
//! previous frame, capped so a stall (window drag, breakpoint, slow frame)
//! can never push one huge step through the flight model.

use std::time::Instant;
use tracing::warn;

/// Elapsed times above this are logged as stalls.
const STALL_WARN_SECS: f64 = 0.25;

/// Measures frame-to-frame time and hands out capped timesteps.
pub struct FrameClock {
    previous_time: Instant,
    max_dt: f64,
    total_time: f64,
    frame_count: u64,
}

impl FrameClock {
    /// A clock starting now; every returned dt is at most `max_dt`.
    pub fn new(max_dt: f64) -> Self {
        Self {
            previous_time: Instant::now(),
            max_dt: max_dt.max(0.0),
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Measure the time since the last tick and return the capped dt.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.previous_time).as_secs_f64();
        self.previous_time = now;
        self.advance(elapsed)
    }

    /// Account for `elapsed` seconds of wall time and return the capped dt.
    pub fn advance(&mut self, elapsed: f64) -> f64 {
        if elapsed > STALL_WARN_SECS {
            warn!(
                "Frame took {:.1}ms, simulating only {:.1}ms",
                elapsed * 1000.0,
                self.max_dt * 1000.0
            );
        }
        let dt = if elapsed.is_finite() {
            elapsed.clamp(0.0, self.max_dt)
        } else {
            0.0
        };
        self.total_time += dt;
        self.frame_count += 1;
        dt
    }

    /// Restart timing from now, e.g. after the window regains focus.
    pub fn restart(&mut self) {
        self.previous_time = Instant::now();
    }

    pub fn max_dt(&self) -> f64 {
        self.max_dt
    }

    /// Total simulated seconds handed out so far.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
