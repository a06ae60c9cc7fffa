//! Fear, stress and boredom
//!
//! Very low confidence triggers an adrenaline rush lasting a few cycles.
//! While it lasts the rush boosts the body, clouds the mind and costs
//! fatigue every cycle; stress effects are suppressed.

use crate::core::scale::{pct_ratio, PCT_MIN};
use crate::entity::{CharacterState, Stat, TempModifier};
use crate::simulation::engine::Cycle;
use crate::simulation::events::{Cause, StateEvent};
use crate::simulation::penalties::{boost, penalize, penalize_resisted};
use rand::Rng;

const SEVERE_STRESS: f64 = 0.85;
const STRESS: f64 = 0.65;
const BOREDOM: f64 = 0.85;

pub fn apply_emotions<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let confidence = pct_ratio(state.get(Stat::Confidence));
    if confidence < cycle.config.adrenaline_trigger_ratio && !state.has_adrenaline() {
        trigger_adrenaline(state, cycle);
    }

    if state.has_adrenaline() {
        state.adjust(Stat::Fatigue, cycle.config.adrenaline_upkeep_fatigue);
    } else {
        apply_stress(state, cycle);
    }

    if pct_ratio(state.get(Stat::Boredom)) > BOREDOM {
        cycle.suffer(state, Cause::Boredom);
        penalize(state, TempModifier::Focus, 0.10);
        state.scale(Stat::Happiness, -0.10);
    }
}

fn trigger_adrenaline<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    cycle.suffer(state, Cause::Fear);
    state.scale(Stat::Stress, 0.50);

    let turns = cycle
        .rng
        .gen_range(cycle.config.adrenaline_min_turns..=cycle.config.adrenaline_max_turns);
    state.set_adrenaline_turns(turns);

    boost(state, TempModifier::Strength, 0.5);
    boost(state, TempModifier::Agility, 0.5);
    boost(state, TempModifier::Speed, 0.5);
    boost(state, TempModifier::Perception, 1.0 / 3.0);
    penalize(state, TempModifier::Intelligence, 0.5);
    penalize(state, TempModifier::Focus, 0.5);
    penalize(state, TempModifier::Memory, 0.25);
    state.set(Stat::Happiness, PCT_MIN);

    tracing::info!(
        "{} is overcome by fear; adrenaline surges for {} turns",
        state.name(),
        turns
    );
    cycle.emit(StateEvent::AdrenalineRush { turns });
}

fn apply_stress<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let stress = pct_ratio(state.get(Stat::Stress));

    if stress > SEVERE_STRESS {
        cycle.suffer(state, Cause::SevereStress);
        penalize_resisted(state, TempModifier::Focus, 0.35, cycle.config);
        penalize_resisted(state, TempModifier::Memory, 0.20, cycle.config);
        penalize_resisted(state, TempModifier::Intelligence, 0.15, cycle.config);
        state.scale(Stat::Willpower, -0.30);
        state.scale(Stat::Happiness, -0.40);
    } else if stress > STRESS {
        cycle.suffer(state, Cause::Stress);
        penalize_resisted(state, TempModifier::Focus, 0.15, cycle.config);
        penalize_resisted(state, TempModifier::Memory, 0.10, cycle.config);
        state.scale(Stat::Willpower, -0.10);
        state.scale(Stat::Happiness, -0.15);
    }
}
