// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end schedule generation tests.
//!
//! Exercises the full engine against the counting argument: 7 rounds of 4
//! disjoint pairs must cover all 28 unordered pairs of the 8 players
//! exactly once.

use std::collections::HashSet;

use pairing_search::roster::{NPAIRS, NPLAYERS, NROUNDS, PAIRS_PER_ROUND};
use pairing_search::{Pair, PairingEngine, Player, PlayerSet, Roster, Schedule, ScheduleError};

use proptest::prelude::*;

fn numeric_roster() -> Roster {
    Roster::new((1..=NPLAYERS).map(|n| n.to_string()).collect()).unwrap()
}

fn generate(roster: Roster) -> Schedule {
    PairingEngine::new(roster).generate().unwrap()
}

fn pair(a: u8, b: u8) -> Pair {
    Pair::new(Player::new(a), Player::new(b)).unwrap()
}

#[test]
fn test_schedule_has_seven_rounds() {
    let schedule = generate(numeric_roster());
    assert_eq!(schedule.len(), NROUNDS);
}

#[test]
fn test_every_round_partitions_the_roster() {
    let schedule = generate(numeric_roster());

    for round in schedule.rounds() {
        assert_eq!(round.pairs().len(), PAIRS_PER_ROUND);

        let mut members = PlayerSet::empty();
        for p in round.iter() {
            assert!(!members.contains(p.lo()), "player {} seated twice", p.lo());
            assert!(!members.contains(p.hi()), "player {} seated twice", p.hi());
            members.insert(p.lo());
            members.insert(p.hi());
        }
        assert_eq!(members, PlayerSet::full());
    }
}

#[test]
fn test_every_pair_occurs_exactly_once() {
    let schedule = generate(numeric_roster());

    let mut seen = HashSet::new();
    for p in schedule.all_pairs() {
        assert!(seen.insert(*p), "pair {} occurred twice", p);
    }
    assert_eq!(seen.len(), NPAIRS);

    // No pair missing either: every 2-combination of the roster is present
    for i in 0..NPLAYERS as u8 {
        for j in (i + 1)..NPLAYERS as u8 {
            assert!(seen.contains(&pair(i, j)), "pair ({},{}) missing", i, j);
        }
    }
}

#[test]
fn test_first_round_is_the_identity_matching() {
    // With an empty constraint state the fixed enumeration order pairs
    // neighbours: (1,2), (3,4), (5,6), (7,8) in roster terms.
    let schedule = generate(numeric_roster());
    let first = &schedule.rounds()[0];
    assert_eq!(
        first.pairs(),
        &[pair(0, 1), pair(2, 3), pair(4, 5), pair(6, 7)]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let a = generate(numeric_roster());
    let b = generate(numeric_roster());
    assert_eq!(a, b);
}

#[test]
fn test_roster_rejection() {
    let short: Vec<String> = (1..=7).map(|n| n.to_string()).collect();
    assert_eq!(
        Roster::new(short).unwrap_err(),
        ScheduleError::RosterSize { actual: 7 }
    );

    let long: Vec<String> = (1..=9).map(|n| n.to_string()).collect();
    assert_eq!(
        Roster::new(long).unwrap_err(),
        ScheduleError::RosterSize { actual: 9 }
    );

    let mut duplicated: Vec<String> = (1..=7).map(|n| n.to_string()).collect();
    duplicated.push("3".to_string());
    assert_eq!(
        Roster::new(duplicated).unwrap_err(),
        ScheduleError::DuplicatePlayer("3".to_string())
    );
}

#[test]
fn test_pair_equality_is_unordered() {
    assert_eq!(pair(0, 1), pair(1, 0));
    assert_ne!(pair(0, 1), pair(0, 2));
}

proptest! {
    /// Scheduling succeeds with the full covering property for any roster
    /// of eight distinct names, not just the numeric example.
    #[test]
    fn prop_any_roster_schedules_completely(
        names in prop::collection::hash_set("[a-z]{3,10}", NPLAYERS)
    ) {
        let roster = Roster::new(names.into_iter().collect()).unwrap();
        let schedule = PairingEngine::new(roster).generate().unwrap();

        prop_assert_eq!(schedule.len(), NROUNDS);

        let mut seen = HashSet::new();
        for p in schedule.all_pairs() {
            prop_assert!(seen.insert(*p));
        }
        prop_assert_eq!(seen.len(), NPAIRS);
    }
}
