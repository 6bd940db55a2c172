// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental-undo backtracking scanner.
//!
//! The scanner is a state machine over the row-major scan:
//!
//! - **PLACING**: scan the current row's columns, skipping occupied
//!   columns, and commit the first cell the oracle accepts. The very
//!   first marker of an attempt commits unconditionally.
//! - **ROW_COMPLETE**: with the target reached, the search is SOLVED;
//!   with the feasibility bound still holding for the newly placed
//!   marker, scanning advances to the next row; otherwise REVERT.
//! - **REVERT**: walk back from the last marker to the deepest index
//!   from which a solution is still reachable, discard everything from
//!   that root onward, and resume at the root's row one column past it.
//!   A root of 0 instead forces RESTART_LEAD; no root at all exhausts
//!   the search.
//! - **RESTART_LEAD**: advance the leading marker's column and begin a
//!   fresh iteration, or reach EXHAUSTED when the column leaves the
//!   board.
//!
//! The best-run tracker is offered the current sequence at every revert
//! boundary, so the longest partial placement survives for reporting
//! when no full solution exists.
//!
//! # Feasibility bound
//!
//! A marker last placed on row `y` can still lead to a solution only if
//! the `board_height - y - 1` rows strictly below it can hold every
//! marker still required. The bound is evaluated with the engine's
//! current remaining count, both when advancing to a new row and when
//! scanning for a revert root.

use log::{debug, info, trace};

use crate::engine::{Algorithm, RunOutcome, SearchConfig};
use crate::geometry::Marker;
use crate::oracle::{self, Verdict};
use crate::state::{BestRunTracker, Counters, PlacementSequence, SearchCursor, Statistics};

const NAME: &str = "angle-scan-undo";
const VERSION: u32 = 3;
const DESCRIPTION: &str = "Scans the board row by row, placing one queen per row. Each candidate \
cell is checked against every queen already placed: a 45-degree-multiple angle means the cell is \
under attack, and a repeated or antipodal angle means three queens would share a line. When a row \
yields no legal cell, or too few rows remain for the queens outstanding, the scanner reverts to \
the deepest queen from which a solution is still reachable and resumes one column to its right. \
When the first queen itself must move, it advances one column and a new iteration begins; once \
its column leaves the board, the search is exhausted.";

/// Result of a revert: either scanning resumes or the search is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reverted {
    Resumed,
    Exhausted,
}

/// Backtracking scanner with feasibility-pruned incremental undo.
#[derive(Debug)]
pub struct UndoScanner {
    config: SearchConfig,
    placed: PlacementSequence,
    best: BestRunTracker,
    cursor: SearchCursor,
    stats: Statistics,
}

impl UndoScanner {
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

    /// The feasibility bound for the marker at placement index `index`:
    /// the rows strictly below it must hold every marker still required.
    fn feasible(&self, index: usize) -> bool {
        self.config.board_height - self.placed.get(index).row > self.cursor.remaining
    }

    /// PLACING: scan the current row from the cursor's column, committing
    /// the first legal cell. Returns false if the row has none.
    fn scan_row(&mut self) -> bool {
        let row = self.cursor.row;
        debug_assert!(row < self.config.board_height);

        for col in self.cursor.column..self.config.board_width {
            if self.placed.column_occupied(col) {
                continue;
            }
            let candidate = Marker::new(col, row);

            // The leading marker has nothing to conflict with.
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

    /// REVERT: offer the sequence to the best-run tracker, then undo to
    /// the deepest feasible root.
    fn revert(&mut self) -> Reverted {
        self.best.consider(
            self.placed.markers(),
            self.cursor.remaining,
            self.cursor.iteration,
        );

        let root = (0..self.placed.len()).rev().find(|&index| self.feasible(index));
        match root {
            None => {
                debug!("no feasible ancestor remains; search space exhausted");
                Reverted::Exhausted
            }
            Some(0) => self.restart_lead(),
            Some(index) => {
                self.stats.increment(Counters::Reverts);
                let removed = self.placed.truncate_from(index);
                self.cursor.remaining = self.config.target - index as i32;
                self.cursor.resume(removed.row, removed.col + 1);
                debug!(
                    "reverted to queen {}, previously at {}; resuming at ({},{}), {} remain",
                    index + 1,
                    removed,
                    self.cursor.column,
                    self.cursor.row,
                    self.cursor.remaining
                );
                Reverted::Resumed
            }
        }
    }

    /// RESTART_LEAD: advance the leading marker's column and begin a new
    /// iteration, unless the column leaves the board.
    fn restart_lead(&mut self) -> Reverted {
        let next_column = match self.placed.first() {
            Some(lead) => lead.col + 1,
            None => self.config.board_width,
        };
        info!(
            "iteration {} found no solution from lead column {}",
            self.cursor.iteration, self.cursor.lead_column
        );
        if next_column >= self.config.board_width {
            debug!("lead columns exhausted");
            return Reverted::Exhausted;
        }
        self.placed.clear();
        self.cursor.begin_iteration(next_column, self.config.target);
        self.stats.increment(Counters::LeadRestarts);
        debug!("retrying with lead column {next_column}");
        Reverted::Resumed
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
                "no solution; search exhausted after {} iterations",
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

impl Algorithm for UndoScanner {
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
            if self.scan_row() {
                if self.cursor.remaining == 0 {
                    return self.report(true);
                }
                if self.feasible(self.placed.len() - 1) {
                    self.cursor.next_row();
                    continue;
                }
            }
            match self.revert() {
                Reverted::Resumed => {}
                Reverted::Exhausted => return self.report(false),
            }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn config(target: i32, width: i32, height: i32) -> SearchConfig {
        SearchConfig {
            target,
            board_width: width,
            board_height: height,
            start_column: 0,
            keep_best: true,
        }
    }

    #[test]
    fn test_metadata() {
        let scanner = UndoScanner::new(config(4, 4, 4));
        assert_eq!(scanner.name(), "angle-scan-undo");
        assert_eq!(scanner.version(), 3);
        assert!(!scanner.description().is_empty());
    }

    #[test]
    fn test_single_cell_board() {
        let mut scanner = UndoScanner::new(config(1, 1, 1));
        let outcome = scanner.run();
        assert!(outcome.success);
        assert_eq!(outcome.placed, vec![Marker::new(0, 0)]);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(outcome.iteration, 1);
    }

    #[test]
    fn test_two_by_two_exhausts() {
        let mut scanner = UndoScanner::new(config(2, 2, 2));
        let outcome = scanner.run();
        assert!(!outcome.success);
        assert_eq!(outcome.remaining, 1);
        assert_eq!(outcome.total_iterations, 2);
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let mut scanner = UndoScanner::new(config(4, 4, 4));
        let first = scanner.run();
        let second = scanner.run();
        assert_eq!(first, second);
    }

    #[test]
    fn test_statistics_reset_between_runs() {
        let mut scanner = UndoScanner::new(config(2, 2, 2));
        scanner.run();
        let placements = scanner.statistics().get(Counters::Placements);
        scanner.run();
        assert_eq!(scanner.statistics().get(Counters::Placements), placements);
    }
}
