// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! The placement checks here are deliberately independent of the
//! incremental oracle: attacks are re-derived pairwise from the angle
//! rule, and collinearity is decided with exact integer cross products
//! rather than floating-point angles.

use std::collections::HashSet;

use queens_search::geometry::{attack_angle, is_queen_attack, Marker};

/// Initialize logging for a test run. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Every element `i` sits on row `i`, so no two share a row.
pub fn assert_rows_contiguous(placed: &[Marker]) {
    for (index, marker) in placed.iter().enumerate() {
        assert_eq!(
            marker.row, index as i32,
            "marker {index} at {marker} is off its row"
        );
    }
}

/// No two markers share a column.
pub fn assert_columns_distinct(placed: &[Marker]) {
    let columns: HashSet<i32> = placed.iter().map(|m| m.col).collect();
    assert_eq!(columns.len(), placed.len(), "duplicate column in {placed:?}");
}

/// No pair of markers lies on a 45°-multiple line.
pub fn assert_no_queen_attacks(placed: &[Marker]) {
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            let angle = attack_angle(placed[i], placed[j]);
            assert!(
                !is_queen_attack(angle),
                "{} and {} attack each other (angle {angle})",
                placed[i],
                placed[j]
            );
        }
    }
}

/// No three markers are collinear at any angle (integer cross product).
pub fn assert_no_three_collinear(placed: &[Marker]) {
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            for k in (j + 1)..placed.len() {
                let (a, b, c) = (placed[i], placed[j], placed[k]);
                let cross =
                    (b.col - a.col) * (c.row - a.row) - (b.row - a.row) * (c.col - a.col);
                assert_ne!(cross, 0, "{a}, {b} and {c} are collinear");
            }
        }
    }
}

/// Full verification of a returned placement sequence.
pub fn assert_valid_placement(placed: &[Marker]) {
    assert_rows_contiguous(placed);
    assert_columns_distinct(placed);
    assert_no_queen_attacks(placed);
    assert_no_three_collinear(placed);
}
