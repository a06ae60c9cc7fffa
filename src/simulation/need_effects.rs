//! Escalating effects of unmet needs
//!
//! Hunger, thirst and restedness are satiation scales (0 is worst); fatigue
//! grows toward its maximum. Each need applies only its most severe band.

use crate::core::scale::{pct_ratio, PCT_MIN};
use crate::entity::{CharacterState, Stat, TempModifier};
use crate::simulation::engine::Cycle;
use crate::simulation::events::Cause;
use crate::simulation::penalties::{apply_severe_need, penalize_resisted};
use rand::Rng;

pub fn apply_needs<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let needs: [fn(&mut CharacterState, &mut Cycle<'_, R>); 4] =
        [apply_hunger, apply_thirst, apply_fatigue, apply_sleep];
    for need in needs {
        if !state.is_alive() {
            return;
        }
        need(state, cycle);
    }
}

fn apply_hunger<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let hunger = pct_ratio(state.get(Stat::Hunger));

    if hunger < 0.05 {
        state.adjust(Stat::Health, -3);
        apply_severe_need(state, cycle, 0.50, Cause::Starvation, true);
        state.scale(Stat::Comfort, -0.60);
        state.adjust(Stat::Stress, 30);
    } else if hunger < 0.20 {
        apply_severe_need(state, cycle, 0.25, Cause::Hunger, true);
        state.scale(Stat::Comfort, -0.25);
    } else if hunger < 0.40 {
        apply_severe_need(state, cycle, 0.10, Cause::MildHunger, false);
    }
}

fn apply_thirst<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let thirst = pct_ratio(state.get(Stat::Thirst));

    if thirst < 0.05 {
        state.adjust(Stat::Health, -5);
        apply_severe_need(state, cycle, 0.65, Cause::CriticalDehydration, true);
        state.scale(Stat::Comfort, -0.70);
        state.adjust(Stat::Stress, 40);
        if cycle.roll(cycle.config.dehydration_faint_chance) {
            cycle.knock_out(state, Cause::CriticalDehydration);
        }
    } else if thirst < 0.20 {
        apply_severe_need(state, cycle, 0.35, Cause::Dehydration, true);
        state.scale(Stat::Comfort, -0.35);
    } else if thirst < 0.40 {
        apply_severe_need(state, cycle, 0.15, Cause::MildThirst, false);
    }
}

fn apply_fatigue<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let fatigue = pct_ratio(state.get(Stat::Fatigue));

    if fatigue > 0.95 {
        apply_severe_need(state, cycle, 0.50, Cause::UtterExhaustion, true);
        state.set(Stat::Sleep, PCT_MIN);
        state.scale(Stat::Happiness, -0.40);
        state.adjust(Stat::Stress, 25);
        if cycle.roll(cycle.config.exhaustion_collapse_chance) {
            cycle.knock_out(state, Cause::UtterExhaustion);
        }
    } else if fatigue > 0.70 {
        apply_severe_need(state, cycle, 0.25, Cause::SevereFatigue, true);
        state.scale(Stat::Sleep, -0.20);
        state.scale(Stat::Happiness, -0.20);
    } else if fatigue > 0.50 {
        apply_severe_need(state, cycle, 0.10, Cause::Fatigue, false);
        state.scale(Stat::Happiness, -0.05);
    }
}

/// Per-band effects of low restedness
struct SleepBand {
    below: f64,
    cause: Cause,
    focus: f64,
    intelligence: f64,
    willpower: f64,
    happiness: f64,
    stress: i32,
    fatigue: i32,
    comfort: f64,
}

const SLEEP_BANDS: [SleepBand; 4] = [
    SleepBand {
        below: 0.10,
        cause: Cause::CriticalSleepDeprivation,
        focus: 0.50,
        intelligence: 0.30,
        willpower: 0.40,
        happiness: 0.30,
        stress: 50,
        fatigue: 50,
        comfort: 0.80,
    },
    SleepBand {
        below: 0.30,
        cause: Cause::SevereSleepDeprivation,
        focus: 0.25,
        intelligence: 0.15,
        willpower: 0.20,
        happiness: 0.15,
        stress: 20,
        fatigue: 20,
        comfort: 0.50,
    },
    SleepBand {
        below: 0.50,
        cause: Cause::SleepDeprivation,
        focus: 0.10,
        intelligence: 0.05,
        willpower: 0.10,
        happiness: 0.10,
        stress: 10,
        fatigue: 10,
        comfort: 0.20,
    },
    SleepBand {
        below: 0.70,
        cause: Cause::Drowsiness,
        focus: 0.05,
        intelligence: 0.05,
        willpower: 0.05,
        happiness: 0.05,
        stress: 5,
        fatigue: 5,
        comfort: 0.10,
    },
];

/// Stress trickle for a character short of full rest but past every band
const SLEEP_RESTLESS: [(f64, i32); 2] = [(0.90, 2), (1.0, 1)];

fn apply_sleep<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let sleep = pct_ratio(state.get(Stat::Sleep));

    let Some(band) = SLEEP_BANDS.iter().find(|band| sleep < band.below) else {
        if let Some(&(_, stress)) = SLEEP_RESTLESS.iter().find(|(below, _)| sleep < *below) {
            state.adjust(Stat::Stress, stress);
        }
        return;
    };

    cycle.suffer(state, band.cause);
    penalize_resisted(state, TempModifier::Focus, band.focus, cycle.config);
    penalize_resisted(state, TempModifier::Intelligence, band.intelligence, cycle.config);
    state.scale(Stat::Willpower, -band.willpower);
    state.scale(Stat::Happiness, -band.happiness);
    state.adjust(Stat::Stress, band.stress);
    state.adjust(Stat::Fatigue, band.fatigue);
    state.scale(Stat::Comfort, -band.comfort);

    if band.cause == Cause::CriticalSleepDeprivation
        && cycle.roll(cycle.config.sleep_deprivation_collapse_chance)
    {
        cycle.knock_out(state, band.cause);
    }
}
