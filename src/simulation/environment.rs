//! Environmental and physical effects

use crate::core::scale::{NORMAL_BODY_TEMPERATURE, PCT_MAX, PCT_MIN};
use crate::entity::{CharacterState, Stat, TempModifier};
use crate::simulation::engine::Cycle;
use crate::simulation::events::Cause;
use crate::simulation::penalties::penalize;
use rand::Rng;

/// How far body temperature has drifted from normal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Normal,
    Mild,
    Significant,
    Severe,
}

impl TemperatureBand {
    pub fn from_temperature(celsius: i32) -> Self {
        let deviation = celsius - NORMAL_BODY_TEMPERATURE;
        if deviation > 7 || deviation < -10 {
            TemperatureBand::Severe
        } else if deviation > 4 || deviation < -5 {
            TemperatureBand::Significant
        } else if deviation > 2 || deviation < -2 {
            TemperatureBand::Mild
        } else {
            TemperatureBand::Normal
        }
    }
}

pub fn apply_body_temperature<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    match TemperatureBand::from_temperature(state.get(Stat::BodyTemperature)) {
        TemperatureBand::Normal => {}
        TemperatureBand::Mild => {
            cycle.suffer(state, Cause::MildTemperature);
            penalize(state, TempModifier::Focus, 0.20);
            penalize(state, TempModifier::Intelligence, 0.05);
            state.scale(Stat::Comfort, -0.25);
            state.adjust(Stat::Stress, 10);
        }
        TemperatureBand::Significant => {
            cycle.suffer(state, Cause::SignificantTemperature);
            penalize(state, TempModifier::Dexterity, 0.30);
            penalize(state, TempModifier::Agility, 0.30);
            penalize(state, TempModifier::Speed, 0.30);
            penalize(state, TempModifier::Intelligence, 0.20);
            penalize(state, TempModifier::Focus, 0.40);
            state.scale(Stat::Comfort, -0.60);
            state.adjust(Stat::Stress, 25);
        }
        TemperatureBand::Severe => {
            cycle.suffer(state, Cause::ExtremeTemperature);
            penalize(state, TempModifier::Dexterity, 0.50);
            penalize(state, TempModifier::Agility, 0.50);
            penalize(state, TempModifier::Speed, 0.50);
            penalize(state, TempModifier::Intelligence, 0.50);
            penalize(state, TempModifier::Focus, 0.70);
            state.set(Stat::Comfort, PCT_MIN);
            state.set(Stat::Stress, PCT_MAX);
            state.adjust(Stat::Health, -5);
            cycle.knock_out(state, Cause::ExtremeTemperature);
        }
    }
}
