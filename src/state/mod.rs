// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! Everything here is exclusively owned by one search engine instance
//! for the duration of a `run` invocation:
//! - PlacementSequence: markers committed this attempt + occupied columns
//! - BestRunTracker: longest partial placement seen across attempts
//! - SearchCursor: the engine's position within the scan
//! - Statistics: counters incremented as the search progresses

pub mod best_run;
pub mod cursor;
pub mod placement;
pub mod statistics;

pub use best_run::BestRunTracker;
pub use cursor::SearchCursor;
pub use placement::PlacementSequence;
pub use statistics::{Counters, Statistics};
