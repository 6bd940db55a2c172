// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Angle arithmetic for the attack and collinearity rules.
//!
//! All angles are in degrees. `attack_angle` produces values in
//! (−180°, 180°]; `normalize` and `antipodal` shift into [0°, 360°) so
//! that the same line always compares equal regardless of which
//! direction it was measured from.

use crate::geometry::Marker;

/// Angle from `from` to `to`, in degrees relative to the horizontal.
///
/// Uses `atan2` over the integer coordinate deltas, so two pairs of
/// markers on the same ray through `from` yield the same value.
pub fn attack_angle(from: Marker, to: Marker) -> f64 {
    ((to.row - from.row) as f64)
        .atan2((to.col - from.col) as f64)
        .to_degrees()
}

/// Whether `angle` lies on a chess-queen attack line.
///
/// Rounds to the nearest integer degree before the modulo test to
/// tolerate trigonometric floating error. Multiples of 45° cover the
/// shared row (0°/180°), shared column (±90°) and both diagonals.
pub fn is_queen_attack(angle: f64) -> bool {
    (angle.round() as i64) % 45 == 0
}

/// Shift an angle from (−180°, 180°] into [0°, 360°).
pub fn normalize(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// The opposite direction of `angle`, shifted into [0°, 360°).
///
/// A marker lying behind the origin of a line reports the antipodal
/// angle of one lying ahead of it; comparing both forms lets the oracle
/// detect a candidate sitting in the middle of two placed markers.
pub fn antipodal(angle: f64) -> f64 {
    let opposite = if angle >= 0.0 {
        angle - 180.0
    } else {
        angle + 180.0
    };
    if opposite < 0.0 {
        opposite + 360.0
    } else {
        opposite
    }
}
