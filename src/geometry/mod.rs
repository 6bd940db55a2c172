// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the queens search.
//!
//! This module contains the primitives shared by both search variants:
//! - Marker: an immutable (column, row) board position
//! - Angle arithmetic: attack angles, 45°-multiple detection,
//!   normalization into [0°, 360°), antipodal angles

pub mod angle;
pub mod marker;

// Re-export for convenience
pub use angle::{antipodal, attack_angle, is_queen_attack, normalize};
pub use marker::Marker;
