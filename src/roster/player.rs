// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Player index type.
//!
//! A player is identified by its position in the roster, 0..NPLAYERS.
//! Roster order only matters for deterministic indexing; the name a player
//! index resolves to lives on the [`Roster`](crate::roster::Roster).

use crate::roster::constants::NPLAYERS;
use std::fmt;

/// A player index in the range 0..NPLAYERS.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// player indices with other integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Player(u8);

impl Player {
    /// Create a new player index, panicking if out of range.
    ///
    /// # Panics
    ///
    /// Panics if `value >= NPLAYERS`.
    pub fn new(value: u8) -> Self {
        assert!(
            (value as usize) < NPLAYERS,
            "Player out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new player index, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (value as usize) < NPLAYERS {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the player index as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
