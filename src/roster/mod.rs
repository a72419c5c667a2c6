// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Roster types: player indices, player sets, and the validated roster.
//!
//! The roster is the immutable tier of the engine's state. It is validated
//! once at construction (exactly NPLAYERS unique names) and never changes;
//! all other types refer to players by their [`Player`] index into it.

pub mod constants;
pub mod player;
pub mod player_set;

// Re-export for convenience
pub use constants::{NPAIRS, NPLAYERS, NROUNDS, PAIRS_PER_ROUND};
pub use player::Player;
pub use player_set::PlayerSet;

use crate::errors::ScheduleError;

/// An ordered roster of exactly NPLAYERS unique player names.
///
/// Construction is the validation boundary for the whole crate: an engine
/// can only be built from a `Roster`, so a roster of the wrong size or with
/// duplicate names is rejected before any scheduling starts. Order is
/// preserved and gives each name its deterministic [`Player`] index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Validate and construct a roster.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::RosterSize`] if `names` does not contain
    /// exactly NPLAYERS entries, or [`ScheduleError::DuplicatePlayer`] if
    /// any name appears more than once.
    pub fn new(names: Vec<String>) -> Result<Self, ScheduleError> {
        if names.len() != NPLAYERS {
            return Err(ScheduleError::RosterSize {
                actual: names.len(),
            });
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ScheduleError::DuplicatePlayer(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// Get the name of a player by index.
    pub fn name(&self, player: Player) -> &str {
        &self.names[player.as_usize()]
    }

    /// Iterate over all player indices in roster order.
    pub fn players(&self) -> impl Iterator<Item = Player> {
        (0..NPLAYERS as u8).map(Player::new)
    }

    /// Get the roster names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
