//! Headless Survival Runner
//!
//! Sends a character exploring with periodic rests and reports how it fared.
//! Useful for tuning engine config files.

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use survival_sim::core::config::EngineConfig;
use survival_sim::entity::{BodyType, Sex, Stat};
use survival_sim::session::GameSession;
use survival_sim::simulation::StateEvent;
use tracing_subscriber::EnvFilter;

/// Headless Survival Runner - explore until done or dead
#[derive(Parser, Debug)]
#[command(name = "survival_sim")]
#[command(about = "Run a character through a series of explore actions and report the outcome")]
struct Args {
    /// Character name
    #[arg(long, default_value = "Player")]
    name: String,

    /// Number of explore actions
    #[arg(long, default_value_t = 50)]
    actions: u32,

    /// Rest after every N explore actions (0 disables resting)
    #[arg(long, default_value_t = 8)]
    rest_every: u32,

    /// Minutes of each rest
    #[arg(long, default_value_t = 480)]
    rest_minutes: i32,

    /// Engine config TOML; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every event to stderr as it happens
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    name: String,
    seed: u64,
    actions_taken: u32,
    survived: bool,
    conscious: bool,
    final_time: String,
    health: i32,
    hunger: i32,
    thirst: i32,
    fatigue: i32,
    sleep: i32,
    stress: i32,
    mood: String,
    items_found: usize,
    times_knocked_out: u32,
    adrenaline_rushes: u32,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "survival_sim=debug"
    } else {
        "survival_sim=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut session = match GameSession::new(config, Some(seed)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Invalid config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    session.new_game(&args.name, Sex::Male, BodyType::Mesomorph);

    let mut actions_taken = 0;
    let mut times_knocked_out = 0;
    let mut adrenaline_rushes = 0;
    let mut tally = |events: &[StateEvent]| {
        for event in events {
            match event {
                StateEvent::LostConsciousness { .. } => times_knocked_out += 1,
                StateEvent::AdrenalineRush { .. } => adrenaline_rushes += 1,
                _ => {}
            }
            if args.verbose {
                eprintln!("  {}", event.describe(&args.name));
            }
        }
    };

    for action in 1..=args.actions {
        let Some(character) = session.character() else {
            break;
        };
        if !character.is_alive() {
            break;
        }

        if character.is_conscious() {
            if let Some(report) = session.explore() {
                actions_taken += 1;
                tally(&report.events);
            }
        } else if let Some(report) = session.rest(args.rest_minutes) {
            tally(&report.events);
        }

        if args.rest_every > 0 && action % args.rest_every == 0 {
            if let Some(report) = session.rest(args.rest_minutes) {
                tally(&report.events);
            }
        }
    }

    let Some(c) = session.character() else {
        eprintln!("Character vanished during the run");
        return ExitCode::FAILURE;
    };
    let result = RunResult {
        name: c.name().to_string(),
        seed,
        actions_taken,
        survived: c.is_alive(),
        conscious: c.is_conscious(),
        final_time: session.clock().formatted(),
        health: c.health(),
        hunger: c.get(Stat::Hunger),
        thirst: c.get(Stat::Thirst),
        fatigue: c.get(Stat::Fatigue),
        sleep: c.get(Stat::Sleep),
        stress: c.get(Stat::Stress),
        mood: c.mood().label().to_string(),
        items_found: c.inventory().len(),
        times_knocked_out,
        adrenaline_rushes,
    };

    match args.format.as_str() {
        "json" => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                return ExitCode::FAILURE;
            }
        },
        _ => {
            println!("Survival Run");
            println!("============");
            println!("Character: {} (seed {})", result.name, result.seed);
            println!("Explore actions: {}", result.actions_taken);
            println!(
                "Outcome: {}",
                if result.survived { "survived" } else { "died" }
            );
            println!("Time: {}", result.final_time);
            println!(
                "Health {} | Hunger {} | Thirst {} | Fatigue {} | Sleep {} | Stress {}",
                result.health,
                result.hunger,
                result.thirst,
                result.fatigue,
                result.sleep,
                result.stress
            );
            println!("Mood: {}", result.mood);
            println!("Items found: {}", result.items_found);
            println!(
                "Knocked out {} times, {} adrenaline rushes",
                result.times_knocked_out, result.adrenaline_rushes
            );
        }
    }
    ExitCode::SUCCESS
}
