//! Scenario tests for the state engine
//!
//! Each test drives a character through full `process()` cycles and checks
//! the observable outcome:
//! - Starvation hurts without killing in one cycle
//! - Very low confidence triggers an adrenaline rush
//! - Sleeping restores while waking life builds fatigue
//! - Negative moods lift only on full recovery
//! - A rush ends in a crash that clears every modifier

use survival_sim::core::config::EngineConfig;
use survival_sim::entity::{CharacterState, Mood, Stat, TempModifier};
use survival_sim::simulation::{Cause, StateEngine, StateEvent};

fn engine(seed: u64) -> StateEngine {
    StateEngine::with_seed(EngineConfig::default(), seed).unwrap()
}

#[test]
fn test_starvation_spiral_first_cycle() {
    let mut engine = engine(42);
    let mut state = CharacterState::default();
    state.set(Stat::Hunger, 0);

    let events = engine.process(&mut state);

    assert!(state.health() < 100, "health should drop");
    assert!(state.get(Stat::Comfort) < 500, "comfort should drop");
    assert!(state.get(Stat::Stress) > 0, "stress should rise");
    assert!(state.is_alive());
    assert!(events.contains(&StateEvent::Suffering {
        cause: Cause::Starvation
    }));
}

#[test]
fn test_starvation_eventually_kills() {
    let mut engine = engine(42);
    let mut state = CharacterState::default();

    let mut cycles = 0;
    while state.is_alive() && cycles < 500 {
        state.set(Stat::Hunger, 0);
        engine.process(&mut state);
        cycles += 1;
    }

    assert!(!state.is_alive(), "starving for {} cycles should kill", cycles);
    assert_eq!(state.health(), 0);
    assert!(!state.is_conscious());
    assert!(!state.is_awake());
}

#[test]
fn test_adrenaline_trigger() {
    for seed in 0..20 {
        let mut engine = engine(seed);
        let mut state = CharacterState::default();
        state.set(Stat::Confidence, 25);

        let events = engine.process(&mut state);

        let turns = state.adrenaline_turns();
        assert!((3..=5).contains(&turns), "seed {}: {} turns", seed, turns);
        assert_eq!(state.get(Stat::Happiness), 0);
        assert_eq!(state.mood(), Mood::Adrenalized);
        assert!(events.contains(&StateEvent::AdrenalineRush { turns }));
        assert!(state.effective_upper_body_strength() > state.get(Stat::UpperBodyStrength));
        assert!(state.effective_intelligence() < state.get(Stat::Intelligence));
    }
}

#[test]
fn test_rush_runs_its_course() {
    let mut engine = engine(9);
    let mut state = CharacterState::default();
    state.set(Stat::Confidence, 25);

    engine.process(&mut state);
    let turns = state.adrenaline_turns();
    // Keep fear from retriggering once the rush ends
    state.set(Stat::Confidence, 250);

    let mut crashed_after = None;
    for cycle in 1..=turns {
        let events = engine.process(&mut state);
        if events.contains(&StateEvent::AdrenalineCrash) {
            crashed_after = Some(cycle);
            break;
        }
        assert_eq!(state.mood(), Mood::Adrenalized);
    }

    assert_eq!(crashed_after, Some(turns));
    assert!(state.modifiers().is_clear());
    assert!(!state.has_adrenaline());
}

#[test]
fn test_crash_clears_modifiers_and_costs_fatigue() {
    let mut engine = engine(1);
    let mut state = CharacterState::default();
    state.set_adrenaline_turns(1);
    state.set_temp(TempModifier::Speed, 40);
    state.set_temp(TempModifier::Focus, -60);
    let fatigue = state.get(Stat::Fatigue);

    engine.process(&mut state);

    assert_eq!(state.adrenaline_turns(), 0);
    for modifier in TempModifier::ALL {
        assert_eq!(state.temp(modifier), 0, "{:?} not reset", modifier);
    }
    assert_eq!(state.get(Stat::Fatigue), fatigue + 50);
}

#[test]
fn test_needs_decay_asleep_vs_awake() {
    let mut engine = engine(3);

    let mut sleeper = CharacterState::default();
    sleeper.set(Stat::Sleep, 200);
    sleeper.set(Stat::Fatigue, 200);
    sleeper.set_awake(false);
    assert!(sleeper.is_asleep());

    engine.advance_and_decay(&mut sleeper, 120);

    assert!(sleeper.get(Stat::Sleep) > 200);
    assert!(sleeper.get(Stat::Fatigue) < 200);

    let mut waker = CharacterState::default();
    waker.set(Stat::Sleep, 200);
    waker.set(Stat::Fatigue, 200);

    engine.advance_and_decay(&mut waker, 120);

    assert!(waker.get(Stat::Fatigue) >= 200);
    assert_eq!(waker.get(Stat::Sleep), 200);
}

fn recovering_character(health: i32) -> CharacterState {
    let mut state = CharacterState::default();
    state.set_mood(Mood::Stressed);
    state.set(Stat::Stress, 0);
    state.set(Stat::Happiness, 300);
    state.set(Stat::Fatigue, 0);
    state.set(Stat::Health, health);
    state
}

#[test]
fn test_mood_recovers_when_all_conditions_hold() {
    let mut engine = engine(5);
    let mut state = recovering_character(80);

    engine.process(&mut state);

    assert_eq!(state.mood(), Mood::Neutral);
}

#[test]
fn test_mood_sticks_when_one_condition_fails() {
    let mut engine = engine(5);
    let mut state = recovering_character(45);

    engine.process(&mut state);

    assert_eq!(state.mood(), Mood::Stressed);
}

#[test]
fn test_dead_character_is_inert() {
    let mut engine = engine(8);
    let mut state = CharacterState::default();
    state.set(Stat::Health, 0);
    state.set_temp(TempModifier::Agility, -20);

    assert!(engine.process(&mut state).is_empty());
    let after_first = state.clone();
    assert!(state.modifiers().is_clear());

    for _ in 0..5 {
        assert!(engine.process(&mut state).is_empty());
        assert_eq!(state, after_first);
    }
}

#[test]
fn test_extreme_heat_knocks_out() {
    let mut engine = engine(2);
    let mut state = CharacterState::default();
    state.set(Stat::BodyTemperature, 45);

    let events = engine.process(&mut state);

    assert!(!state.is_conscious());
    assert_eq!(state.mood(), Mood::Critical);
    assert_eq!(state.get(Stat::Stress), 500);
    assert!(events.contains(&StateEvent::LostConsciousness {
        cause: Cause::ExtremeTemperature
    }));
}

#[test]
fn test_penalties_do_not_carry_over() {
    let mut engine = engine(4);
    let mut state = CharacterState::default();
    state.set(Stat::BodyTemperature, 42);

    engine.process(&mut state);
    let first = state.temp(TempModifier::Dexterity);
    engine.process(&mut state);

    assert!(first < 0);
    assert_eq!(state.temp(TempModifier::Dexterity), first);
}
