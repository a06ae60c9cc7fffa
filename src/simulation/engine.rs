//! The per-cycle state transition
//!
//! `StateEngine::process` runs the rule groups in a fixed order, each able
//! to read what earlier groups did this cycle:
//!
//! 1. guard (the dead only get their modifiers cleared)
//! 2. adrenaline bookkeeping and the general modifier reset
//! 3. body temperature
//! 4. organ integrity
//! 5. needs
//! 6. health
//! 7. emotions and adrenaline triggering
//! 8. mood classification
//! 9. death confirmation
//!
//! Steps 2-7 stop as soon as one of them kills the character; mood and death
//! confirmation always run. All randomness flows through the engine's single
//! generator.

use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::entity::{CharacterState, Stat};
use crate::simulation::events::{Cause, StateEvent};
use crate::simulation::{emotion, environment, health, mood, need_effects, organs};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Borrowed view of the engine for the duration of one cycle
pub struct Cycle<'a, R: Rng> {
    pub config: &'a EngineConfig,
    pub rng: &'a mut R,
    pub events: &'a mut Vec<StateEvent>,
}

impl<'a, R: Rng> Cycle<'a, R> {
    pub fn emit(&mut self, event: StateEvent) {
        self.events.push(event);
    }

    /// True with probability `chance`
    pub fn roll(&mut self, chance: f64) -> bool {
        self.rng.gen::<f64>() < chance
    }

    /// Record that a rule band applied its effects
    pub fn suffer(&mut self, state: &CharacterState, cause: Cause) {
        tracing::debug!("{} is suffering from {}", state.name(), cause.description());
        self.emit(StateEvent::Suffering { cause });
    }

    /// Knock the character out, recording why if they were still conscious
    pub fn knock_out(&mut self, state: &mut CharacterState, cause: Cause) {
        if !state.is_conscious() {
            return;
        }
        state.set_conscious(false);
        tracing::info!("{} loses consciousness from {}", state.name(), cause.description());
        self.emit(StateEvent::LostConsciousness { cause });
    }
}

type Rule<R> = fn(&mut CharacterState, &mut Cycle<'_, R>);

pub struct StateEngine<R: Rng = ChaCha8Rng> {
    config: EngineConfig,
    rng: R,
}

impl StateEngine<ChaCha8Rng> {
    /// Engine seeded from entropy
    pub fn new(config: EngineConfig) -> Result<Self> {
        Self::with_seed(config, rand::random())
    }

    /// Engine with a deterministic generator
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Replace the generator, e.g. after loading a saved game
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

impl<R: Rng> StateEngine<R> {
    /// Fails with `InvalidConfig` when `config` does not validate
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Let `minutes` of game time act on the character's needs
    pub fn advance_and_decay(&mut self, state: &mut CharacterState, minutes: i32) {
        state.update_needs(minutes, &self.config.needs_decay, &mut self.rng);
    }

    /// Run one full cycle, mutating `state` in place
    ///
    /// Returns the events of the cycle in the order they happened.
    pub fn process(&mut self, state: &mut CharacterState) -> Vec<StateEvent> {
        let mut events = Vec::new();

        if !state.is_alive() {
            state.reset_temporary_modifiers();
            return events;
        }

        let mut cycle = Cycle {
            config: &self.config,
            rng: &mut self.rng,
            events: &mut events,
        };

        let rules: [Rule<R>; 6] = [
            tick_adrenaline,
            environment::apply_body_temperature,
            organs::apply_organ_integrity,
            need_effects::apply_needs,
            health::apply_health,
            emotion::apply_emotions,
        ];
        for rule in rules {
            rule(state, &mut cycle);
            if !state.is_alive() {
                break;
            }
        }

        mood::update_mood(state);
        confirm_death(state, &mut cycle);

        events
    }
}

/// Count down an active rush, or clear last cycle's modifiers
///
/// While a rush lasts the general reset is skipped so its boosts persist.
fn tick_adrenaline<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let turns = state.adrenaline_turns();
    if turns == 0 {
        state.reset_temporary_modifiers();
        return;
    }

    let remaining = turns - 1;
    state.set_adrenaline_turns(remaining);
    if remaining == 0 {
        state.reset_temporary_modifiers();
        state.adjust(Stat::Fatigue, cycle.config.adrenaline_crash_fatigue);
        tracing::info!("{}'s adrenaline rush wears off", state.name());
        cycle.emit(StateEvent::AdrenalineCrash);
    }
}

fn confirm_death<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    if state.health() <= 0 && state.is_alive() {
        state.set_alive(false);
    }
    if !state.is_alive() {
        state.set_adrenaline_turns(0);
        tracing::info!("{} has died", state.name());
        cycle.emit(StateEvent::Died);
    }
}
