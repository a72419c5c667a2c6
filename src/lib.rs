// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search for 2v2 teammate pairing schedules.
//!
//! Given a roster of eight players, the engine produces seven rounds of four
//! disjoint teammate pairs such that every one of the C(8,2) = 28 unordered
//! pairs of players occurs as teammates exactly once. Each round seats the
//! eight players at two tables of 2-vs-2; the schedule is a 1-factorization
//! of the complete graph on the roster.
//!
//! # Architecture
//!
//! State is split into two explicitly separated tiers:
//!
//! ## Tier 1: Roster (Immutable)
//!
//! The validated roster never changes after construction:
//! - Ordered sequence of exactly eight unique player names
//! - Deterministic index assignment ([`Player`] is an index into it)
//!
//! ## Tier 2: Constraint state (Mutable between rounds)
//!
//! - [`ConstraintState`] - symmetric used-pair matrix, folded forward only
//!   when a completed round is committed, never speculatively during search
//! - The per-round "remaining choices" set is function-local to the search
//!   and is snapshotted per recursive call, so sibling branches never share
//!   mutable state
//!
//! # Search Algorithm
//!
//! One round at a time, the engine runs a depth-first backtracking search
//! over 2-combinations of the remaining players, pruning any branch whose
//! most recently added pair has already occurred in a prior round. Candidate
//! pairs are enumerated in a fixed positional order, so the schedule is
//! fully deterministic for a given roster order.

pub mod engine;
pub mod errors;
pub mod roster;
pub mod schedule;
pub mod state;

// Re-export commonly used types
pub use engine::PairingEngine;
pub use errors::ScheduleError;
pub use roster::{Player, PlayerSet, Roster};
pub use schedule::{Pair, Round, Schedule};
pub use state::ConstraintState;
