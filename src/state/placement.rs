// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered sequence of markers committed in the current attempt.
//!
//! One marker per row, in strictly increasing row order: element `i`
//! always sits on the `i`-th row visited. Alongside the sequence an
//! occupied-columns vector tracks which columns already hold a marker.
//! The column set is purely a performance pre-filter (a shared column
//! is independently rejected by the oracle as a 90° attack) but
//! checking it first avoids the oracle call entirely.
//!
//! Invariant: the occupied set is always exactly the set of columns used
//! by the sequence's current contents. `push`, `truncate_from` and
//! `clear` are the only mutators and each maintains it.

use crate::geometry::Marker;

/// Markers placed so far in the active attempt, plus occupied columns.
#[derive(Debug, Clone)]
pub struct PlacementSequence {
    markers: Vec<Marker>,
    /// Indexed by column; true while a placed marker uses the column.
    occupied: Vec<bool>,
}

impl PlacementSequence {
    /// Create an empty sequence for a board `board_width` columns wide.
    pub fn new(board_width: i32) -> Self {
        Self {
            markers: Vec::new(),
            occupied: vec![false; board_width.max(0) as usize],
        }
    }

    /// Number of markers currently placed.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no markers are placed.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// The placed markers in placement (row) order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The marker at placement index `index`.
    pub fn get(&self, index: usize) -> Marker {
        self.markers[index]
    }

    /// The first (leading) marker, if any.
    pub fn first(&self) -> Option<Marker> {
        self.markers.first().copied()
    }

    /// Whether `col` already holds a marker this attempt.
    pub fn column_occupied(&self, col: i32) -> bool {
        self.occupied[col as usize]
    }

    /// Commit a marker, marking its column occupied.
    pub fn push(&mut self, marker: Marker) {
        debug_assert!(
            !self.column_occupied(marker.col),
            "column {} already occupied",
            marker.col
        );
        self.occupied[marker.col as usize] = true;
        self.markers.push(marker);
    }

    /// Discard every marker from `index` onward, releasing their columns.
    ///
    /// Returns the removed root marker (the one formerly at `index`);
    /// the search resumes at its row, one column past it.
    pub fn truncate_from(&mut self, index: usize) -> Marker {
        let root = self.markers[index];
        for discarded in &self.markers[index..] {
            self.occupied[discarded.col as usize] = false;
        }
        self.markers.truncate(index);
        root
    }

    /// Remove all markers and release all columns.
    pub fn clear(&mut self) {
        for discarded in &self.markers {
            self.occupied[discarded.col as usize] = false;
        }
        self.markers.clear();
    }
}
