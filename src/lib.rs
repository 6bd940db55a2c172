// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for N-queens placements under a no-three-in-line rule.
//!
//! The crate places N queens on a W×H board so that no two queens share
//! a chess-queen attack line (row, column or 45° diagonal) and no three
//! queens are collinear at *any* angle.
//!
//! # Architecture
//!
//! - [`geometry`]: the `Marker` position value and the angle arithmetic
//!   both rules are expressed in.
//! - [`oracle`]: the pure constraint oracle deciding the legality of one
//!   candidate cell against the markers already placed.
//! - [`state`]: search bookkeeping: the placement sequence with its
//!   occupied-column pre-filter, the best-run tracker, the search cursor
//!   and statistics counters.
//! - [`engine`]: two search variants behind one [`Algorithm`] contract:
//!   the incremental-undo scanner (reverts to the deepest feasible
//!   ancestor on a dead end) and the full-restart scanner (discards the
//!   whole attempt).
//!
//! # Execution model
//!
//! A run is single-threaded, synchronous and run-to-completion: the
//! engine owns all mutable state exclusively, performs no I/O, and
//! always terminates in either a solution or exhaustion of the leading
//! marker's columns. Exhaustion is an ordinary outcome, reported as
//! `success == false` in the result record, never an error.
//!
//! # Example
//!
//! ```
//! use queens_search::engine::{Algorithm, SearchConfig, UndoScanner};
//!
//! let mut scanner = UndoScanner::new(SearchConfig {
//!     target: 5,
//!     board_width: 5,
//!     board_height: 5,
//!     start_column: 0,
//!     keep_best: true,
//! });
//! let outcome = scanner.run();
//! assert!(outcome.total_iterations <= 5);
//! ```

pub mod engine;
pub mod geometry;
pub mod oracle;
pub mod state;

// Re-export commonly used types
pub use engine::{Algorithm, FullRestartScanner, RunOutcome, SearchConfig, UndoScanner};
pub use geometry::Marker;
