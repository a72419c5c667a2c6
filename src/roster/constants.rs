// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the pairing schedule.
//!
//! All round and pair counts are derived from NPLAYERS. The completion
//! predicate of the engine (every player has teamed with every other player)
//! is only meaningful for the fixed roster size defined here.

/// Number of players in the roster.
///
/// The schedule shape is derived from this value: NPLAYERS - 1 rounds of
/// NPLAYERS / 2 disjoint pairs cover all C(NPLAYERS, 2) teammate pairs
/// exactly once. Only 8 is supported; the game seats two tables of 2-vs-2.
pub const NPLAYERS: usize = 8;

/// Number of teammate pairs per round (NPLAYERS / 2).
///
/// A round is a perfect matching: every player appears in exactly one pair.
pub const PAIRS_PER_ROUND: usize = NPLAYERS / 2;

/// Number of rounds in a complete schedule (NPLAYERS - 1).
///
/// Each player must team with each of the NPLAYERS - 1 others, one per round.
pub const NROUNDS: usize = NPLAYERS - 1;

/// Compute factorial at compile time.
const fn factorial(n: usize) -> usize {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

/// Compute binomial coefficient (n choose k) at compile time.
const fn choose(n: usize, k: usize) -> usize {
    if k > n {
        0
    } else if k == 0 || k == n {
        1
    } else {
        factorial(n) / (factorial(k) * factorial(n - k))
    }
}

/// Total number of unordered teammate pairs: C(NPLAYERS, 2) = 28.
///
/// This equals NROUNDS * PAIRS_PER_ROUND, which is why a complete schedule
/// of 7 rounds uses every pair exactly once.
pub const NPAIRS: usize = choose(NPLAYERS, 2);

/// Compile-time assertion that the roster can be split into pairs.
const _: () = assert!(NPLAYERS % 2 == 0, "NPLAYERS must be even");

/// Compile-time assertion that player indices fit the PlayerSet word.
const _: () = assert!(NPLAYERS <= 8, "PlayerSet uses a u8 bitset");

/// Compile-time assertion that the counting argument is consistent.
const _: () = assert!(
    NPAIRS == NROUNDS * PAIRS_PER_ROUND,
    "every pair must fit in exactly one round slot"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(4), 24);
        assert_eq!(factorial(8), 40320);
    }

    #[test]
    fn test_choose() {
        assert_eq!(choose(8, 0), 1);
        assert_eq!(choose(8, 1), 8);
        assert_eq!(choose(8, 2), 28);
        assert_eq!(choose(8, 8), 1);
        assert_eq!(choose(2, 3), 0);
    }

    #[test]
    fn test_derived_counts() {
        assert_eq!(NPLAYERS, 8);
        assert_eq!(PAIRS_PER_ROUND, 4);
        assert_eq!(NROUNDS, 7);
        assert_eq!(NPAIRS, 28);
    }
}
