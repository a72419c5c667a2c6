// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One round of play: a perfect matching of the roster.
//!
//! A round holds exactly PAIRS_PER_ROUND pairs whose combined membership is
//! the full roster with no repeats. The presentation layer seats the first
//! two pairs at table 1 and the last two pairs at table 2.

use crate::roster::{PlayerSet, PAIRS_PER_ROUND};
use crate::schedule::Pair;
use std::fmt;

/// A full partition of the roster into PAIRS_PER_ROUND teammate pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pairs: [Pair; PAIRS_PER_ROUND],
}

impl Round {
    /// Create a round from a slice of pairs.
    ///
    /// The round search only ever assembles disjoint pairs covering the
    /// whole roster, so violations here are internal bugs.
    ///
    /// # Panics
    ///
    /// Panics if the slice does not hold exactly PAIRS_PER_ROUND pairs, or
    /// if the pairs are not disjoint, or if they do not cover the roster.
    pub fn new(pairs: &[Pair]) -> Self {
        assert_eq!(
            pairs.len(),
            PAIRS_PER_ROUND,
            "round must contain {} pairs, got {}",
            PAIRS_PER_ROUND,
            pairs.len()
        );
        let mut members = PlayerSet::empty();
        for pair in pairs {
            assert!(
                !members.contains(pair.lo()) && !members.contains(pair.hi()),
                "pairs in a round must be disjoint: {} overlaps {}",
                pair,
                members
            );
            members.insert(pair.lo());
            members.insert(pair.hi());
        }
        assert_eq!(
            members,
            PlayerSet::full(),
            "round must cover the full roster, got {}",
            members
        );

        let mut arr = [pairs[0]; PAIRS_PER_ROUND];
        arr.copy_from_slice(pairs);
        Self { pairs: arr }
    }

    /// The pairs of this round, in the order the search chose them.
    pub fn pairs(&self) -> &[Pair; PAIRS_PER_ROUND] {
        &self.pairs
    }

    /// Iterate over the pairs of this round.
    pub fn iter(&self) -> impl Iterator<Item = &Pair> {
        self.pairs.iter()
    }
}

impl fmt::Display for Round {
    /// Format a round as "(0,1) (2,3) (4,5) (6,7)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", pair)?;
        }
        Ok(())
    }
}
