// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Schedule types: pairs, rounds, and the schedule itself.
//!
//! - [`Pair`]: an unordered 2-element set of distinct players
//! - [`Round`]: PAIRS_PER_ROUND disjoint pairs partitioning the roster
//! - [`Schedule`]: the ordered, append-only sequence of rounds

pub mod pair;
pub mod round;

// Re-export for convenience
pub use pair::Pair;
pub use round::Round;

/// The ordered sequence of rounds produced by the engine.
///
/// Rounds are appended one at a time and never reordered or mutated after
/// append. A complete schedule for 8 players holds NROUNDS = 7 rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    /// Create an empty schedule.
    pub(crate) fn new() -> Self {
        Self { rounds: Vec::new() }
    }

    /// Append a completed round.
    pub(crate) fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    /// All rounds, in generation order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of rounds generated so far.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Check whether the schedule holds no rounds.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Iterate over every pair in every round, in generation order.
    pub fn all_pairs(&self) -> impl Iterator<Item = &Pair> {
        self.rounds.iter().flat_map(|round| round.iter())
    }
}
