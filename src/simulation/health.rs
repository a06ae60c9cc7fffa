//! Injury effects driven by the health ratio

use crate::core::scale::health_ratio;
use crate::entity::{CharacterState, Stat};
use crate::simulation::engine::Cycle;
use crate::simulation::events::Cause;
use crate::simulation::penalties::apply_severe_need;
use rand::Rng;

const CRITICAL: f64 = 0.15;
const SIGNIFICANT: f64 = 0.40;
const MODERATE: f64 = 0.70;

pub fn apply_health<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    if !state.is_alive() {
        return;
    }
    let ratio = health_ratio(state.health());

    if ratio < CRITICAL {
        apply_severe_need(state, cycle, 0.70, Cause::CriticalInjuries, true);
        state.scale(Stat::Comfort, -0.60);
        state.scale(Stat::Happiness, -0.50);
        state.adjust(Stat::Stress, 50);
        if ratio < cycle.config.health_blackout_ratio {
            cycle.knock_out(state, Cause::CriticalInjuries);
        }
    } else if ratio < SIGNIFICANT {
        apply_severe_need(state, cycle, 0.30, Cause::SignificantInjuries, true);
        state.scale(Stat::Comfort, -0.25);
        state.adjust(Stat::Stress, 20);
    } else if ratio < MODERATE {
        apply_severe_need(state, cycle, 0.10, Cause::ModerateInjuries, false);
        state.scale(Stat::Comfort, -0.10);
        state.adjust(Stat::Stress, 5);
    }
}
