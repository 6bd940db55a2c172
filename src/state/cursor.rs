// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search cursor: the engine's mutable position within the scan.

/// Where the engine currently is: the row and column being scanned, how
/// many markers are still required, which iteration is running, and the
/// column at which the leading marker starts this iteration.
///
/// Fully reset at the start of each iteration via `begin_iteration`;
/// advanced incrementally within one.
#[derive(Debug, Clone, Copy)]
pub struct SearchCursor {
    /// Row currently being scanned.
    pub row: i32,
    /// Column at which the current row's scan starts or resumes.
    pub column: i32,
    /// Markers still required to complete the placement.
    pub remaining: i32,
    /// Count of leading-marker restarts, starting at 1.
    pub iteration: i32,
    /// Column of the leading marker for the current iteration.
    pub lead_column: i32,
}

impl SearchCursor {
    /// Cursor for the first iteration of a run.
    pub fn start(start_column: i32, target: i32) -> Self {
        Self {
            row: 0,
            column: start_column,
            remaining: target,
            iteration: 1,
            lead_column: start_column,
        }
    }

    /// Reset for a new iteration with the leading marker at `lead_column`.
    pub fn begin_iteration(&mut self, lead_column: i32, target: i32) {
        self.row = 0;
        self.column = lead_column;
        self.remaining = target;
        self.iteration += 1;
        self.lead_column = lead_column;
    }

    /// Advance to the next row, scanning from column 0.
    pub fn next_row(&mut self) {
        self.row += 1;
        self.column = 0;
    }

    /// Resume scanning at `row`, starting from `column`.
    pub fn resume(&mut self, row: i32, column: i32) {
        self.row = row;
        self.column = column;
    }
}
