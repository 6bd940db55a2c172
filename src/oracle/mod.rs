// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constraint oracle for candidate queen placements.
//!
//! The oracle is a pure decision function: given a candidate marker and
//! the markers already committed in the current attempt, it decides
//! legality under two rules:
//!
//! 1. **Direct attack**: the angle from any placed marker to the
//!    candidate is a multiple of 45°, i.e. a shared row, column or
//!    diagonal, the classic queen threat.
//! 2. **Collinearity**: the candidate lies on one straight line with two
//!    placed markers, at *any* angle. Detected by accumulating the
//!    normalized angle to each placed marker in a local list and
//!    checking each new angle (and its antipodal form) against the list.
//!
//! Angles of 0°/180° and ±90° are multiples of 45° and are caught by the
//! direct-attack rule, never the collinearity rule: any *two* points
//! trivially line up, and only the 45° multiples are queen threats.
//!
//! The collinearity comparison is an exact `f64` comparison. This works
//! because proportional integer coordinate deltas produce identical
//! `atan2` results, and both sides of the comparison go through the same
//! normalization.

use crate::geometry::{antipodal, attack_angle, is_queen_attack, normalize, Marker};

/// Outcome of checking one candidate against the placed markers.
///
/// The rejecting variants carry the indices of the offending markers in
/// placement order, for diagnostics at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No conflict with any placed marker.
    Legal,
    /// A placed marker attacks the candidate along a 45°-multiple line.
    Attacked {
        /// Index of the attacking marker.
        by: usize,
    },
    /// The candidate is collinear with two placed markers.
    Collinear {
        /// Index of the marker whose angle triggered the match.
        along: usize,
        /// Index of the earlier marker already in the angle list.
        with: usize,
    },
}

/// Check a candidate placement against all markers placed this attempt.
///
/// Pure function with no side effects. Placed markers are scanned in
/// placement order; the first conflict rejects immediately, so an attack
/// by an early marker is reported even if a later one also conflicts.
pub fn check(candidate: Marker, placed: &[Marker]) -> Verdict {
    // Angles from placed markers seen so far in this evaluation only.
    let mut angles: Vec<f64> = Vec::with_capacity(placed.len());

    for (along, &queen) in placed.iter().enumerate() {
        let angle = attack_angle(queen, candidate);
        if is_queen_attack(angle) {
            return Verdict::Attacked { by: along };
        }

        let line = normalize(angle);
        let opposite = antipodal(angle);
        if let Some(with) = angles.iter().position(|&a| a == line || a == opposite) {
            return Verdict::Collinear { along, with };
        }
        angles.push(line);
    }

    Verdict::Legal
}

/// Whether placing `candidate` is legal given the markers placed so far.
pub fn is_legal(candidate: Marker, placed: &[Marker]) -> bool {
    check(candidate, placed) == Verdict::Legal
}
