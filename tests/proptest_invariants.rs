//! Property-based tests for character state invariants
//!
//! Uses `proptest` to check that range clamping, the alive/conscious/awake
//! cascade and willpower attenuation hold for arbitrary inputs and seeds.

use proptest::prelude::*;

use survival_sim::core::config::EngineConfig;
use survival_sim::entity::{CharacterState, Stat, TempModifier};
use survival_sim::simulation::{resist_penalty, StateEngine};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_stat() -> impl Strategy<Value = Stat> {
    prop::sample::select(Stat::ALL.to_vec())
}

fn arb_modifier() -> impl Strategy<Value = TempModifier> {
    prop::sample::select(TempModifier::ALL.to_vec())
}

/// A character with its needs, vitals and emotions anywhere in range
fn arb_character() -> impl Strategy<Value = CharacterState> {
    (
        (0..=100i32, 25..=45i32, 0..=500i32, 0..=500i32),
        (0..=500i32, 0..=500i32, 0..=500i32, 0..=500i32),
        (0..=500i32, 0..=500i32, 0..=500i32, 0..=500i32),
        (0..=5u32, 0..=4u32, any::<bool>()),
    )
        .prop_map(
            |(
                (health, temperature, hunger, thirst),
                (fatigue, sleep, neural, respiratory),
                (stress, happiness, confidence, willpower),
                (adrenaline, concussions, awake),
            )| {
                let mut c = CharacterState::default();
                c.set(Stat::Health, health);
                c.set(Stat::BodyTemperature, temperature);
                c.set(Stat::Hunger, hunger);
                c.set(Stat::Thirst, thirst);
                c.set(Stat::Fatigue, fatigue);
                c.set(Stat::Sleep, sleep);
                c.set(Stat::Neural, neural);
                c.set(Stat::Respiratory, respiratory);
                c.set(Stat::Stress, stress);
                c.set(Stat::Happiness, happiness);
                c.set(Stat::Confidence, confidence);
                c.set(Stat::Willpower, willpower);
                c.set_adrenaline_turns(adrenaline);
                c.set_concussion_count(concussions);
                c.set_awake(awake);
                c
            },
        )
}

fn assert_in_range(c: &CharacterState) -> Result<(), TestCaseError> {
    for stat in Stat::ALL {
        let (lo, hi) = stat.range();
        let value = c.get(stat);
        prop_assert!(
            (lo..=hi).contains(&value),
            "{} = {} outside [{}, {}]",
            stat.name(),
            value,
            lo,
            hi
        );
    }
    Ok(())
}

fn assert_flags_cascade(c: &CharacterState) -> Result<(), TestCaseError> {
    if c.health() <= 0 {
        prop_assert!(!c.is_alive());
        prop_assert!(!c.is_conscious());
        prop_assert!(!c.is_awake());
    }
    if !c.is_conscious() {
        prop_assert!(!c.is_awake());
    }
    if !c.is_alive() {
        prop_assert!(!c.is_conscious());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Property: every mutator clamps
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn mutators_always_clamp(
        ops in prop::collection::vec((arb_stat(), any::<i32>(), 0..3u8), 1..60),
    ) {
        let mut c = CharacterState::default();
        for (stat, value, op) in ops {
            match op {
                0 => c.set(stat, value),
                1 => c.adjust(stat, value),
                _ => c.scale(stat, value as f64 / 1000.0),
            }
        }
        assert_in_range(&c)?;
        assert_flags_cascade(&c)?;
    }
}

// ---------------------------------------------------------------------------
// Property: effective stats stay within their floors and ceilings
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn effective_stats_bounded(
        mods in prop::collection::vec((arb_modifier(), any::<i32>()), 0..20),
    ) {
        let mut c = CharacterState::default();
        for (modifier, delta) in mods {
            c.add_temp(modifier, delta);
        }
        prop_assert!(c.effective_agility() >= 0);
        prop_assert!(c.effective_upper_body_strength() >= 0);
        prop_assert!((0..=500).contains(&c.effective_focus()));
        prop_assert!((0..=500).contains(&c.effective_sight()));
        prop_assert!((0..=500).contains(&c.effective_memory()));
    }
}

// ---------------------------------------------------------------------------
// Property: invariants hold after every engine cycle
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn cycles_preserve_invariants(
        character in arb_character(),
        seed in any::<u64>(),
        cycles in 1..12usize,
    ) {
        let mut engine = StateEngine::with_seed(EngineConfig::default(), seed).unwrap();
        let mut c = character;
        for _ in 0..cycles {
            engine.advance_and_decay(&mut c, 45);
            engine.process(&mut c);
            assert_in_range(&c)?;
            assert_flags_cascade(&c)?;
        }
    }
}

// ---------------------------------------------------------------------------
// Property: same seed, same history
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cycles_are_deterministic(character in arb_character(), seed in any::<u64>()) {
        let mut a = StateEngine::with_seed(EngineConfig::default(), seed).unwrap();
        let mut b = StateEngine::with_seed(EngineConfig::default(), seed).unwrap();
        let mut ca = character.clone();
        let mut cb = character;
        for _ in 0..5 {
            a.advance_and_decay(&mut ca, 60);
            b.advance_and_decay(&mut cb, 60);
            prop_assert_eq!(a.process(&mut ca), b.process(&mut cb));
        }
        prop_assert_eq!(ca, cb);
    }
}

// ---------------------------------------------------------------------------
// Property: the dead stop changing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn dead_state_is_fixed_point(character in arb_character(), seed in any::<u64>()) {
        let mut engine = StateEngine::with_seed(EngineConfig::default(), seed).unwrap();
        let mut c = character;
        c.set_alive(false);

        prop_assert!(engine.process(&mut c).is_empty());
        let settled = c.clone();
        prop_assert!(settled.modifiers().is_clear());

        engine.advance_and_decay(&mut c, 120);
        prop_assert!(engine.process(&mut c).is_empty());
        prop_assert_eq!(c, settled);
    }
}

// ---------------------------------------------------------------------------
// Property: willpower never fully negates a penalty
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn willpower_attenuation_bounded(
        penalty in 0.0..1.0f64,
        willpower in -1000..2000i32,
        weight in 0.0..5.0f64,
        cap in 0.0..0.99f64,
    ) {
        let config = EngineConfig {
            resistance_weight: weight,
            resistance_cap: cap,
            ..EngineConfig::default()
        };
        let resisted = resist_penalty(penalty, willpower, &config);
        prop_assert!(resisted >= (1.0 - cap) * penalty - 1e-12);
        prop_assert!(resisted <= penalty + 1e-12);
    }
}
