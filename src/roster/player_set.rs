// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PlayerSet type for representing sets of players as bitsets.
//!
//! A PlayerSet is a compact representation of a set of players using a
//! bitset, where bit i represents the presence of player index i.
//!
//! # Examples
//!
//! ```
//! use pairing_search::roster::{Player, PlayerSet};
//!
//! let mut set = PlayerSet::empty();
//! set.insert(Player::new(0));
//! set.insert(Player::new(1));
//! set.insert(Player::new(3));
//!
//! assert_eq!(set.len(), 3);
//! assert_eq!(format!("{}", set), "|013|");
//!
//! // Iterate over players in the set
//! let players: Vec<u8> = set.iter().map(|p| p.value()).collect();
//! assert_eq!(players, vec![0, 1, 3]);
//! ```

use crate::roster::constants::NPLAYERS;
use crate::roster::Player;
use std::fmt;

/// A set of players represented as a bitset.
///
/// Bit i (counting from LSB) is set if player i is in the set.
/// This provides O(1) insert, remove, and contains operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSet(u8);

impl PlayerSet {
    /// Create an empty player set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a player set containing all valid players (0..NPLAYERS).
    pub const fn full() -> Self {
        Self(((1u16 << NPLAYERS) - 1) as u8)
    }

    /// Create a player set from a slice of players.
    pub fn from_players(players: &[Player]) -> Self {
        let mut set = Self::empty();
        for &player in players {
            set.insert(player);
        }
        set
    }

    /// Check if the set contains a specific player.
    pub fn contains(self, player: Player) -> bool {
        (self.0 >> player.value()) & 1 != 0
    }

    /// Insert a player into the set.
    pub fn insert(&mut self, player: Player) {
        self.0 |= 1 << player.value();
    }

    /// Remove a player from the set.
    pub fn remove(&mut self, player: Player) {
        self.0 &= !(1 << player.value());
    }

    /// Get the number of players in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Iterate over all players in the set.
    ///
    /// Players are yielded in ascending index order (0, 1, 2, ...).
    pub fn iter(self) -> impl Iterator<Item = Player> {
        PlayerSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over players in a PlayerSet.
struct PlayerSetIter {
    bits: u8,
    index: u8,
}

impl Iterator for PlayerSetIter {
    type Item = Player;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NPLAYERS as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Player::new(idx));
            }
        }
        None
    }
}

impl fmt::Display for PlayerSet {
    /// Format a player set as "|013|".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for player in self.iter() {
            write!(f, "{}", player.value())?;
        }
        write!(f, "|")
    }
}

impl From<&[Player]> for PlayerSet {
    fn from(players: &[Player]) -> Self {
        Self::from_players(players)
    }
}
