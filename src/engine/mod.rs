// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pairing engine: round-by-round backtracking search.
//!
//! The engine owns the roster, the cross-round [`ConstraintState`], and the
//! growing [`Schedule`]. Schedule generation repeats a depth-first round
//! search until the constraint state reports completion.
//!
//! # Round search
//!
//! One round is built incrementally from an empty partial round and the
//! full roster as remaining choices:
//!
//! 1. If the partial round is non-empty and its most recently added pair
//!    already occurred in a prior round, fail immediately. Each pair is
//!    checked exactly once, at the recursion step right after it was added,
//!    so this last-pair check is sufficient - no pair ever enters a partial
//!    round unchecked.
//! 2. If no players remain, the partial round is complete.
//! 3. Otherwise enumerate all 2-combinations of the remaining players in
//!    fixed positional order (first index < second index) and recurse, each
//!    call on its own snapshot of the partial round and remaining set. The
//!    first success short-circuits the enumeration.
//!
//! The search is deterministic for a given roster order. It carries no
//! memoization of failed partial states; revisiting equivalent subtrees is
//! acceptable at N=8.

use crate::errors::ScheduleError;
use crate::roster::{Player, Roster};
use crate::schedule::{Pair, Round, Schedule};
use crate::state::ConstraintState;
use tracing::debug;

/// Engine producing a complete teammate pairing schedule.
///
/// Construction requires a validated [`Roster`], so an engine always holds
/// exactly eight unique players.
#[derive(Debug)]
pub struct PairingEngine {
    /// Immutable roster (Tier 1)
    roster: Roster,
    /// Cross-round used-pair matrix, mutated only between rounds (Tier 2)
    state: ConstraintState,
    /// Accepted rounds, in generation order
    schedule: Schedule,
}

impl PairingEngine {
    /// Create an engine over a validated roster.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            state: ConstraintState::new(),
            schedule: Schedule::new(),
        }
    }

    /// The roster this engine schedules for.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Generate the complete schedule.
    ///
    /// Repeats the round search until every player has teamed with every
    /// other player, committing each accepted round into the constraint
    /// state before the next search begins. Consumes the engine; schedule
    /// generation is all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::Exhausted`] if no valid next round exists
    /// while the schedule is still incomplete. For a correct 8-player
    /// search this indicates a stuck constraint state and is surfaced
    /// rather than retried.
    pub fn generate(mut self) -> Result<Schedule, ScheduleError> {
        let players: Vec<Player> = self.roster.players().collect();

        while !self.state.is_complete() {
            match self.search_round(&[], &players)? {
                Some(pairs) => {
                    let round = Round::new(&pairs);
                    debug!(
                        "round {} accepted: {} ({} of {} pairs used)",
                        self.schedule.len() + 1,
                        round,
                        self.state.pairs_used() + pairs.len(),
                        crate::roster::NPAIRS
                    );
                    self.state.commit_round(&round);
                    self.schedule.push(round);
                }
                None => {
                    return Err(ScheduleError::Exhausted {
                        rounds_completed: self.schedule.len(),
                        pairs_used: self.state.pairs_used(),
                    });
                }
            }
        }

        Ok(self.schedule)
    }

    /// Depth-first search for one valid round.
    ///
    /// Returns `Some(pairs)` with a complete partition of the roster into
    /// pairs none of which occurred in a prior round, or `None` if no such
    /// round extends `partial`. Every recursive call operates on its own
    /// copies of `partial` and `remaining`, so sibling branches never see
    /// each other's choices.
    fn search_round(
        &self,
        partial: &[Pair],
        remaining: &[Player],
    ) -> Result<Option<Vec<Pair>>, ScheduleError> {
        // Early pruning: only the most recently added pair needs checking,
        // since every earlier pair was checked when it was the last one.
        if let Some(last) = partial.last() {
            if self.state.is_used(*last) {
                return Ok(None);
            }
        }

        if remaining.is_empty() {
            return Ok(Some(partial.to_vec()));
        }

        for i in 0..remaining.len() {
            for j in (i + 1)..remaining.len() {
                let candidate = Pair::new(remaining[i], remaining[j])?;

                let mut next_partial = partial.to_vec();
                next_partial.push(candidate);

                let mut next_remaining = remaining.to_vec();
                // Remove the higher index first so the lower stays valid
                next_remaining.remove(j);
                next_remaining.remove(i);

                if let Some(pairs) = self.search_round(&next_partial, &next_remaining)? {
                    return Ok(Some(pairs));
                }
            }
        }

        Ok(None)
    }
}
