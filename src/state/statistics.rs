// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters incremented by the search engines as they place, reject and
//! revert markers. Purely observational; no search decision reads them.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone)]
#[repr(u8)]
pub enum Counters {
    /// Constraint oracle invocations (occupied-column skips excluded).
    OracleCalls,
    /// Markers committed to the placement sequence.
    Placements,
    /// Candidate cells rejected by the oracle.
    Rejections,
    /// Reverts to a feasible ancestor (undo variant only).
    Reverts,
    /// Leading-marker restarts, i.e. iterations after the first.
    LeadRestarts,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_get() {
        let mut stats = Statistics::new();
        assert_eq!(stats.get(Counters::OracleCalls), 0);
        stats.increment(Counters::OracleCalls);
        stats.increment(Counters::OracleCalls);
        stats.increment(Counters::Reverts);
        assert_eq!(stats.get(Counters::OracleCalls), 2);
        assert_eq!(stats.get(Counters::Reverts), 1);
        assert_eq!(stats.get(Counters::Placements), 0);
    }

    #[test]
    fn test_reset() {
        let mut stats = Statistics::new();
        stats.increment(Counters::LeadRestarts);
        stats.reset();
        assert_eq!(stats.get(Counters::LeadRestarts), 0);
    }
}
