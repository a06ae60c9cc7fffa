//! Survival Sim - Entry Point
//!
//! Interactive terminal front end: creates a character, then lets the
//! player explore, rest, inspect and tweak stats while the engine runs.

use survival_sim::core::config::EngineConfig;
use survival_sim::core::error::{Result, SimError};
use survival_sim::entity::{BodyType, CharacterState, Sex, Stat, StatAccessor};
use survival_sim::session::GameSession;
use survival_sim::simulation::StateEvent;

use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Game minutes covered by each cycle of `run`
const RUN_CYCLE_MINUTES: i32 = 30;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("survival_sim=debug")),
        )
        .init();

    tracing::info!("Survival Sim starting...");

    let config = match std::env::var("SURVIVAL_SIM_CONFIG") {
        Ok(path) => EngineConfig::load(Path::new(&path))?,
        Err(_) => EngineConfig::default(),
    };
    let mut session = GameSession::new(config, None)?;

    print!("Character name: ");
    io::stdout().flush()?;
    let mut name = String::new();
    io::stdin().read_line(&mut name)?;
    session.new_game(name.trim(), Sex::Male, BodyType::Mesomorph);

    println!("\n=== SURVIVAL SIM ===");
    println!();
    println!("Commands:");
    println!("  explore / e         - Explore the surroundings (30-60 min)");
    println!("  rest <minutes>      - Sleep for a while");
    println!("  status / s          - Show detailed status");
    println!("  set <stat> <value>  - Overwrite a stat, e.g. set hunger 0");
    println!("  run <n>             - Let n half-hour cycles pass");
    println!("  save <file>         - Save the session as JSON");
    println!("  load <file>         - Load a saved session");
    println!("  quit / q            - Exit the game");
    println!();

    loop {
        display_status(&session);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "q" {
            break;
        }

        if input == "explore" || input == "e" {
            match session.explore() {
                Some(report) => {
                    println!("You explore for {} minutes.", report.minutes);
                    print_events(&session, &report.events);
                    if let Some(item) = report.found {
                        println!("You found an {}!", item);
                    }
                }
                None => println!("You cannot explore right now."),
            }
            continue;
        }

        if input == "status" || input == "s" {
            if let Some(character) = session.character() {
                display_detailed_status(character);
            }
            continue;
        }

        if let Some(arg) = input.strip_prefix("rest ") {
            match arg.trim().parse::<i32>() {
                Ok(minutes) => match session.rest(minutes) {
                    Some(report) => {
                        if report.came_to {
                            println!("You come to after {} minutes.", report.minutes);
                        } else {
                            println!("You rest for {} minutes.", report.minutes);
                        }
                        print_events(&session, &report.events);
                    }
                    None => println!("You cannot rest right now."),
                },
                Err(_) => println!("Usage: rest <minutes>"),
            }
            continue;
        }

        if let Some(arg) = input.strip_prefix("run ") {
            if let Ok(n) = arg.trim().parse::<u32>() {
                println!("Running {} cycles...", n);
                for _ in 0..n {
                    session.advance_and_decay(RUN_CYCLE_MINUTES);
                    let events = session.process();
                    print_events(&session, &events);
                    if events.iter().any(StateEvent::is_terminal) {
                        break;
                    }
                }
                println!("Now {}.", session.clock().formatted());
            } else {
                println!("Usage: run <number>");
            }
            continue;
        }

        if let Some(arg) = input.strip_prefix("set ") {
            set_stat(&mut session, arg);
            continue;
        }

        if let Some(path) = input.strip_prefix("save ") {
            match session.to_json().and_then(|json| Ok(std::fs::write(path.trim(), json)?)) {
                Ok(()) => println!("Saved to {}", path.trim()),
                Err(e) => println!("Could not save: {}", e),
            }
            continue;
        }

        if let Some(path) = input.strip_prefix("load ") {
            let loaded = std::fs::read_to_string(path.trim())
                .map_err(SimError::from)
                .and_then(|json| {
                    GameSession::from_json(&json, session.engine().config().clone(), None)
                });
            match loaded {
                Ok(restored) => {
                    session = restored;
                    println!("Loaded {}", path.trim());
                }
                Err(e) => println!("Could not load: {}", e),
            }
            continue;
        }

        println!("Unknown command. Available: explore, rest <n>, status, set <stat> <value>, run <n>, save, load, quit");
    }

    println!("\nGoodbye! It is {}.", session.clock().formatted());
    Ok(())
}

fn set_stat(session: &mut GameSession, arg: &str) {
    let mut parts = arg.split_whitespace();
    let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
        println!("Usage: set <stat> <value>");
        return;
    };
    let Ok(value) = value.parse::<i32>() else {
        println!("Value must be a whole number");
        return;
    };
    let Some(character) = session.character_mut() else {
        return;
    };
    if character.set_value(name, value) {
        println!("{} is now {}", name, character.get_value(name).unwrap_or(value));
    } else {
        println!("Unknown stat '{}'. Known: {}", name, CharacterState::field_names().join(", "));
    }
}

fn print_events(session: &GameSession, events: &[StateEvent]) {
    let name = session.character().map_or("You", CharacterState::name);
    for event in events {
        println!("  {}", event.describe(name));
    }
}

/// Display a brief status line
fn display_status(session: &GameSession) {
    println!();
    let Some(c) = session.character() else {
        println!("--- {} | no character ---", session.clock().formatted());
        return;
    };
    println!(
        "--- {} | {} | Health {} | Mood {} ---",
        session.clock().formatted(),
        c.name(),
        c.health(),
        c.mood().label()
    );
    if !c.is_alive() {
        println!("  {} is dead.", c.name());
    } else if !c.is_conscious() {
        println!("  {} is unconscious. Rest to recover.", c.name());
    }
    println!();
}

/// Display every group of attributes
fn display_detailed_status(c: &CharacterState) {
    let identity = c.identity();
    println!();
    println!("=== {} ===", c.name());
    println!(
        "  {:?}, age {}, {:?}, {:.2} m, {:.0} kg",
        identity.sex(),
        identity.age(),
        identity.body_type(),
        identity.height_m(),
        identity.weight_kg()
    );
    println!(
        "  Alive: {}, Conscious: {}, Awake: {}, Mood: {}",
        c.is_alive(),
        c.is_conscious(),
        c.is_awake(),
        c.mood().label()
    );
    if c.has_adrenaline() {
        println!("  Adrenaline: {} turns left", c.adrenaline_turns());
    }

    let groups: [(&str, &[Stat]); 4] = [
        (
            "Vitals",
            &[Stat::Health, Stat::BodyTemperature, Stat::BloodPressure, Stat::HeartRate],
        ),
        (
            "Needs",
            &[
                Stat::Hunger,
                Stat::Thirst,
                Stat::Fatigue,
                Stat::Sleep,
                Stat::Hygiene,
                Stat::Bladder,
                Stat::Comfort,
            ],
        ),
        (
            "Mind",
            &[Stat::Memory, Stat::Focus, Stat::Willpower, Stat::Knowledge],
        ),
        (
            "Emotions",
            &[
                Stat::Happiness,
                Stat::Social,
                Stat::Stress,
                Stat::Boredom,
                Stat::Confidence,
            ],
        ),
    ];
    for (title, stats) in groups {
        let line: Vec<String> = stats
            .iter()
            .map(|stat| format!("{} {}", stat.name(), c.get(*stat)))
            .collect();
        println!("  {}: {}", title, line.join(", "));
    }
    println!(
        "  Effective: strength {}, agility {}, speed {}, dexterity {}, focus {}, sight {}",
        c.effective_upper_body_strength(),
        c.effective_agility(),
        c.effective_speed(),
        c.effective_dexterity(),
        c.effective_focus(),
        c.effective_sight()
    );
    if !c.inventory().is_empty() {
        let items: Vec<&str> = c.inventory().iter().collect();
        println!("  Inventory: {}", items.join(", "));
    }
    println!();
}
