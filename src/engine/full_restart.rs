// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full-restart scanner.
//!
//! The simpler, non-incremental variant: the same row-major scan and the
//! same constraint oracle as the undo scanner, but any dead end (a row
//! with no legal cell, or running out of rows) discards the whole
//! attempt. The leading marker then advances one column and the attempt
//! starts over from an empty board. No feasibility bound, no partial
//! undo, no state shared with the other variant.

use log::{debug, info, trace};

use crate::engine::{Algorithm, RunOutcome, SearchConfig};
use crate::geometry::Marker;
use crate::oracle::{self, Verdict};
use crate::state::{BestRunTracker, Counters, PlacementSequence, SearchCursor, Statistics};

const NAME: &str = "angle-scan-restart";
const VERSION: u32 = 1;
const DESCRIPTION: &str = "Scans the board row by row, placing one queen per row. Each candidate \
cell is checked against every queen already placed: a 45-degree-multiple angle means the cell is \
under attack, and a repeated or antipodal angle means three queens would share a line. If any row \
yields no legal cell, the attempt is discarded and a new iteration starts with the first queen one \
column to the right. When the first queen's column leaves the board, the search gives up.";

/// Scanner that restarts the whole attempt on any dead end.
#[derive(Debug)]
pub struct FullRestartScanner {
    config: SearchConfig,
    placed: PlacementSequence,
    best: BestRunTracker,
    cursor: SearchCursor,
    stats: Statistics,
}

impl FullRestartScanner {
    /// Create a scanner for `config`. The run itself starts on [`Algorithm::run`].
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            placed: PlacementSequence::new(config.board_width),
            best: BestRunTracker::new(config.keep_best),
            cursor: SearchCursor::start(config.start_column, config.target),
            stats: Statistics::new(),
        }
    }

    /// Scan the current row from the cursor's column, committing the
    /// first legal cell. Returns false if the row has none.
    fn scan_row(&mut self) -> bool {
        let row = self.cursor.row;
        for col in self.cursor.column..self.config.board_width {
            if self.placed.column_occupied(col) {
                continue;
            }
            let candidate = Marker::new(col, row);

            if self.placed.is_empty() {
                self.commit(candidate);
                return true;
            }

            self.stats.increment(Counters::OracleCalls);
            match oracle::check(candidate, self.placed.markers()) {
                Verdict::Legal => {
                    self.commit(candidate);
                    return true;
                }
                Verdict::Attacked { by } => {
                    self.stats.increment(Counters::Rejections);
                    trace!(
                        "candidate {candidate} threatened by queen {} at {}",
                        by + 1,
                        self.placed.get(by)
                    );
                }
                Verdict::Collinear { along, with } => {
                    self.stats.increment(Counters::Rejections);
                    trace!(
                        "candidate {candidate} on a line with queen {} at {} and queen {} at {}",
                        along + 1,
                        self.placed.get(along),
                        with + 1,
                        self.placed.get(with)
                    );
                }
            }
        }
        false
    }

    fn commit(&mut self, marker: Marker) {
        self.placed.push(marker);
        self.cursor.remaining -= 1;
        self.stats.increment(Counters::Placements);
        debug!("queen {} placed at {}", self.placed.len(), marker);
    }

    /// One full attempt from an empty board with the current lead column.
    /// Returns true if the attempt placed every marker.
    fn attempt(&mut self) -> bool {
        while self.cursor.remaining > 0 && self.cursor.row < self.config.board_height {
            if !self.scan_row() {
                return false;
            }
            self.cursor.next_row();
        }
        self.cursor.remaining == 0
    }

    fn report(&mut self, success: bool) -> RunOutcome {
        if success {
            info!(
                "solution found on iteration {}: {} queens placed",
                self.cursor.iteration,
                self.placed.len()
            );
            self.best.force(self.placed.markers(), 0, self.cursor.iteration);
        } else {
            info!(
                "no solution; lead columns exhausted after {} iterations",
                self.cursor.iteration
            );
            if !self.config.keep_best || self.best.is_empty() {
                self.best.force(
                    self.placed.markers(),
                    self.cursor.remaining,
                    self.cursor.iteration,
                );
            }
        }
        RunOutcome {
            success,
            placed: self.best.markers().to_vec(),
            remaining: self.best.remaining(),
            iteration: self.best.iteration(),
            total_iterations: self.cursor.iteration,
        }
    }
}

impl Algorithm for FullRestartScanner {
    fn run(&mut self) -> RunOutcome {
        debug_assert!(self.config.board_width > 0 && self.config.board_height > 0);
        debug_assert!(self.config.start_column < self.config.board_width);

        self.placed.clear();
        self.best = BestRunTracker::new(self.config.keep_best);
        self.stats.reset();
        self.cursor = SearchCursor::start(self.config.start_column, self.config.target);

        if self.config.target <= 0 {
            return self.report(true);
        }

        loop {
            if self.attempt() {
                return self.report(true);
            }
            self.best.consider(
                self.placed.markers(),
                self.cursor.remaining,
                self.cursor.iteration,
            );
            let next_column = self.cursor.lead_column + 1;
            info!(
                "iteration {} found no solution from lead column {}",
                self.cursor.iteration, self.cursor.lead_column
            );
            if next_column >= self.config.board_width {
                return self.report(false);
            }
            self.placed.clear();
            self.cursor.begin_iteration(next_column, self.config.target);
            self.stats.increment(Counters::LeadRestarts);
            debug!("retrying with lead column {next_column}");
        }
    }

    fn name(&self) -> &str {
        NAME
    }

    fn version(&self) -> u32 {
        VERSION
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn statistics(&self) -> &Statistics {
        &self.stats
    }
}
