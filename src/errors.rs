// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for roster validation and schedule generation.
//!
//! All failure surfaces are typed error values propagated to the caller;
//! nothing is swallowed and no partial schedule is ever produced.

use crate::roster::Player;
use thiserror::Error;

/// Errors from roster construction and schedule generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Roster does not contain exactly NPLAYERS entries.
    #[error("roster must contain exactly 8 players, got {actual}")]
    RosterSize { actual: usize },

    /// Roster contains the same player name more than once.
    #[error("duplicate player '{0}' in roster")]
    DuplicatePlayer(String),

    /// A pair was constructed from a single player.
    ///
    /// Enforced defensively at the pair boundary; correct search logic
    /// never produces this.
    #[error("player {0} cannot be paired with themselves")]
    SelfPair(Player),

    /// No valid next round exists although the schedule is incomplete.
    ///
    /// For a correct 8-player search this is unreachable (a 1-factorization
    /// into 7 perfect matchings always exists), but a stuck constraint state
    /// is surfaced rather than retried forever.
    #[error(
        "no valid round after {rounds_completed} rounds ({pairs_used} of 28 pairs used)"
    )]
    Exhausted {
        rounds_completed: usize,
        pairs_used: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ScheduleError::RosterSize { actual: 7 };
        assert_eq!(err.to_string(), "roster must contain exactly 8 players, got 7");

        let err = ScheduleError::DuplicatePlayer("ann".to_string());
        assert_eq!(err.to_string(), "duplicate player 'ann' in roster");

        let err = ScheduleError::SelfPair(Player::new(3));
        assert_eq!(err.to_string(), "player 3 cannot be paired with themselves");

        let err = ScheduleError::Exhausted {
            rounds_completed: 4,
            pairs_used: 16,
        };
        assert_eq!(
            err.to_string(),
            "no valid round after 4 rounds (16 of 28 pairs used)"
        );
    }
}
