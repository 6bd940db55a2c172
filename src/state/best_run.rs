// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Best-run tracker: the longest placement seen across failed attempts.
//!
//! When the keep-best policy is enabled, the tracker snapshots the
//! placement sequence at every backtrack boundary and keeps the longest
//! one for reporting when no full solution exists. Ties keep the earlier
//! snapshot, so the stored length is non-decreasing over a run.

use crate::geometry::Marker;

/// Snapshot of the longest placement sequence observed so far.
#[derive(Debug, Clone)]
pub struct BestRunTracker {
    keep_best: bool,
    markers: Vec<Marker>,
    remaining: i32,
    iteration: i32,
}

impl BestRunTracker {
    /// Create an empty tracker. `keep_best` enables snapshotting; when
    /// disabled, `consider` is a no-op and only `force` stores anything.
    pub fn new(keep_best: bool) -> Self {
        Self {
            keep_best,
            markers: Vec::new(),
            remaining: 0,
            iteration: 0,
        }
    }

    /// Offer the current sequence; stored only on strict length improvement.
    pub fn consider(&mut self, markers: &[Marker], remaining: i32, iteration: i32) {
        if self.keep_best && markers.len() > self.markers.len() {
            self.markers = markers.to_vec();
            self.remaining = remaining;
            self.iteration = iteration;
        }
    }

    /// Replace the snapshot unconditionally.
    ///
    /// Used at final termination: a full solution always supersedes any
    /// partial snapshot, and with keep-best disabled the final attempt
    /// is reported instead.
    pub fn force(&mut self, markers: &[Marker], remaining: i32, iteration: i32) {
        self.markers = markers.to_vec();
        self.remaining = remaining;
        self.iteration = iteration;
    }

    /// Markers of the stored snapshot.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Length of the stored snapshot.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers still unplaced at capture time.
    pub fn remaining(&self) -> i32 {
        self.remaining
    }

    /// Iteration counter at capture time.
    pub fn iteration(&self) -> i32 {
        self.iteration
    }
}
