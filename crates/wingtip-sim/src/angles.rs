//! Degree-based angle helpers.

/// Wrap an angle in degrees into `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest rotation from `from` to `to`, in `[-180, 180)`.
#[must_use]
pub fn shortest_turn(from: f64, to: f64) -> f64 {
    (to - from + 540.0).rem_euclid(360.0) - 180.0
}

/// Absolute angular difference between two headings, in `[0, 180]`.
#[must_use]
pub fn heading_error(from: f64, to: f64) -> f64 {
    shortest_turn(from, to).abs()
}
