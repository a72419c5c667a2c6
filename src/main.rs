// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point.
//!
//! Thin presentation layer around [`PairingEngine`]: parses the roster from
//! the command line, generates the schedule, and prints each round as two
//! tables of 2-vs-2. The first two pairs of a round are table 1's teams,
//! the last two are table 2's.

use clap::Parser;
use pairing_search::{Pair, PairingEngine, Roster, Schedule, ScheduleError};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "pairings",
    version,
    about = "Schedule 2v2 teammate pairings so every pair of players teams up exactly once"
)]
struct Cli {
    /// Player names, exactly eight and unique.
    #[arg(default_values_t = (1..=8).map(|n| n.to_string()))]
    players: Vec<String>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ScheduleError> {
    let roster = Roster::new(cli.players)?;
    let engine = PairingEngine::new(roster.clone());
    let schedule = engine.generate()?;
    print_schedule(&roster, &schedule);
    Ok(())
}

fn print_schedule(roster: &Roster, schedule: &Schedule) {
    for (i, round) in schedule.rounds().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Round {}", i + 1);
        let pairs = round.pairs();
        println!(
            "  Table 1: {} vs {}",
            team(roster, pairs[0]),
            team(roster, pairs[1])
        );
        println!(
            "  Table 2: {} vs {}",
            team(roster, pairs[2]),
            team(roster, pairs[3])
        );
    }
}

fn team(roster: &Roster, pair: Pair) -> String {
    format!("{} and {}", roster.name(pair.lo()), roster.name(pair.hi()))
}
