// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search engines for the no-three-in-line queens problem.
//!
//! Two variants share the [`Algorithm`] contract:
//!
//! - [`UndoScanner`]: incremental backtracking with feasibility-pruned
//!   undo. On a dead end it reverts to the deepest marker from which a
//!   solution is still reachable and resumes one column past it.
//! - [`FullRestartScanner`]: on any dead end the whole attempt is
//!   discarded and the leading marker advances one column.
//!
//! Both scan row-major, place exactly one marker per row, and consult
//! the constraint oracle for every candidate cell. Each variant owns its
//! state exclusively; nothing is shared between instances, so
//! independent leading-column attempts could run concurrently.
//!
//! A run never fails in the error sense: exhausting the search space is
//! an ordinary, deterministic outcome reported through [`RunOutcome`]
//! with `success == false`.

pub mod full_restart;
pub mod undo;

pub use full_restart::FullRestartScanner;
pub use undo::UndoScanner;

use crate::geometry::Marker;
use crate::state::Statistics;

/// Configuration for one search run.
///
/// Passed explicitly at engine construction; there is no ambient or
/// global configuration. Preconditions are the caller's responsibility:
/// `0 <= start_column < board_width` and `target <= board_height`
/// (otherwise the run is guaranteed to exhaust).
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Number of markers to place.
    pub target: i32,
    /// Board width in columns.
    pub board_width: i32,
    /// Board height in rows.
    pub board_height: i32,
    /// Column for the leading marker of the first iteration.
    pub start_column: i32,
    /// Report the longest attempt seen, rather than the final one, when
    /// no full solution exists.
    pub keep_best: bool,
}

/// Result record of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Whether a complete placement was found.
    pub success: bool,
    /// The reported placement: the solution, the best partial run, or
    /// the final attempt, depending on outcome and policy.
    pub placed: Vec<Marker>,
    /// Markers still unplaced in the reported placement.
    pub remaining: i32,
    /// Iteration in which the reported placement was captured.
    pub iteration: i32,
    /// Iterations attempted in total. Bounded by
    /// `board_width - start_column`.
    pub total_iterations: i32,
}

/// A search algorithm variant.
///
/// Implementations carry identifying metadata alongside the single
/// `run` operation, so callers can select and report on variants
/// through one dispatch surface.
pub trait Algorithm {
    /// Execute the search to completion and report the outcome.
    fn run(&mut self) -> RunOutcome;

    /// Short identifying name of the variant.
    fn name(&self) -> &str;

    /// Variant version; higher values are newer.
    fn version(&self) -> u32;

    /// Plain-text description of how the variant works.
    fn description(&self) -> &str;

    /// Counters accumulated during the most recent run.
    fn statistics(&self) -> &Statistics;
}
