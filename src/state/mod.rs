// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cross-round constraint state.
//!
//! [`ConstraintState`] records which teammate pairs have already occurred in
//! committed rounds. It is the mutable tier of the engine's state, and it is
//! only ever mutated between rounds by [`ConstraintState::commit_round`];
//! the round search consults it read-only. The diagonal is never consulted
//! (a player is never paired with themselves).

use crate::roster::{Player, NPLAYERS};
use crate::schedule::{Pair, Round};

/// Symmetric used-pair matrix over player indices.
///
/// `used[i][j] == used[j][i]` is true once players i and j have been
/// teammates in some committed round. Zero-filled at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    used: [[bool; NPLAYERS]; NPLAYERS],
}

impl ConstraintState {
    /// Create a zero-filled state: no pair has occurred yet.
    pub fn new() -> Self {
        Self {
            used: [[false; NPLAYERS]; NPLAYERS],
        }
    }

    /// Check whether a pair has occurred in a committed round.
    pub fn is_used(&self, pair: Pair) -> bool {
        self.used[pair.lo().as_usize()][pair.hi().as_usize()]
    }

    /// Mark a pair as used, in both orientations.
    pub fn mark_used(&mut self, pair: Pair) {
        self.used[pair.lo().as_usize()][pair.hi().as_usize()] = true;
        self.used[pair.hi().as_usize()][pair.lo().as_usize()] = true;
    }

    /// Fold an accepted round's pairs into the state.
    pub fn commit_round(&mut self, round: &Round) {
        for &pair in round.iter() {
            self.mark_used(pair);
        }
    }

    /// Number of distinct partners a player has already teamed with.
    pub fn partner_count(&self, player: Player) -> usize {
        self.used[player.as_usize()].iter().filter(|&&u| u).count()
    }

    /// Completion predicate: every player has teamed with all NPLAYERS - 1
    /// others.
    pub fn is_complete(&self) -> bool {
        (0..NPLAYERS as u8).all(|i| self.partner_count(Player::new(i)) == NPLAYERS - 1)
    }

    /// Total number of distinct pairs marked used.
    pub fn pairs_used(&self) -> usize {
        let marked: usize = (0..NPLAYERS as u8)
            .map(|i| self.partner_count(Player::new(i)))
            .sum();
        // Each pair is marked in both orientations
        marked / 2
    }
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}
