// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unordered teammate pair.
//!
//! A pair is a 2-element set of distinct players. Members are stored
//! normalized (lower index first) so that the derived equality and hash
//! ignore the order the members were supplied in.

use crate::errors::ScheduleError;
use crate::roster::{Player, PlayerSet};
use std::fmt;

/// An unordered pair of two distinct players designated as teammates.
///
/// `Pair::new(a, b)` and `Pair::new(b, a)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair {
    lo: Player,
    hi: Player,
}

impl Pair {
    /// Create a pair from two distinct players.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::SelfPair`] if both players are the same.
    pub fn new(a: Player, b: Player) -> Result<Self, ScheduleError> {
        if a == b {
            return Err(ScheduleError::SelfPair(a));
        }
        if a.value() < b.value() {
            Ok(Self { lo: a, hi: b })
        } else {
            Ok(Self { lo: b, hi: a })
        }
    }

    /// The member with the lower roster index.
    pub fn lo(self) -> Player {
        self.lo
    }

    /// The member with the higher roster index.
    pub fn hi(self) -> Player {
        self.hi
    }

    /// Check whether a player is a member of this pair.
    pub fn contains(self, player: Player) -> bool {
        self.lo == player || self.hi == player
    }

    /// Both members as a [`PlayerSet`].
    pub fn members(self) -> PlayerSet {
        PlayerSet::from_players(&[self.lo, self.hi])
    }
}

impl fmt::Display for Pair {
    /// Format a pair as "(0,3)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lo, self.hi)
    }
}
