// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Marker: a queen's position on the board.

use std::fmt;

/// A queen placed at a (column, row) position.
///
/// Coordinates are zero-indexed with the origin at the top-left of the
/// board: `col` in `[0, board_width)`, `row` in `[0, board_height)`.
/// Markers are immutable values; the search replaces them rather than
/// mutating them in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    /// Column (x-coordinate) on the board.
    pub col: i32,
    /// Row (y-coordinate) on the board.
    pub row: i32,
}

impl Marker {
    /// Create a marker at `(col, row)`.
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_equality() {
        assert_eq!(Marker::new(3, 1), Marker::new(3, 1));
        assert_ne!(Marker::new(3, 1), Marker::new(1, 3));
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::new(4, 7).to_string(), "(4,7)");
    }
}
