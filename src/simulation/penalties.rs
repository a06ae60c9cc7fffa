//! Shared penalty arithmetic
//!
//! Every temporary penalty or boost is a fraction of the *base* value of the
//! stat it targets, so results do not depend on offsets already applied
//! earlier in the cycle. Offsets stack additively.
//!
//! The single strength modifier covers both upper and lower body, so it is
//! sized from whichever of the two is larger.

use crate::core::config::EngineConfig;
use crate::core::scale::pct_ratio;
use crate::entity::{CharacterState, Stat, TempModifier};
use crate::simulation::engine::Cycle;
use crate::simulation::events::Cause;
use rand::Rng;

/// Fraction of a penalty that `willpower` absorbs, capped below 100%
pub fn willpower_resistance(willpower: i32, config: &EngineConfig) -> f64 {
    (pct_ratio(willpower) * config.resistance_weight)
        .min(config.resistance_cap)
        .max(0.0)
}

/// Attenuate a penalty magnitude by willpower
///
/// The result is never below `(1 - resistance_cap) * penalty`.
pub fn resist_penalty(penalty: f64, willpower: i32, config: &EngineConfig) -> f64 {
    penalty * (1.0 - willpower_resistance(willpower, config))
}

/// Base value a temporary modifier is measured against
pub fn modifier_base(state: &CharacterState, modifier: TempModifier) -> i32 {
    match modifier {
        TempModifier::Strength => state
            .get(Stat::UpperBodyStrength)
            .max(state.get(Stat::LowerBodyStrength)),
        TempModifier::Agility => state.get(Stat::Agility),
        TempModifier::Speed => state.get(Stat::Speed),
        TempModifier::Dexterity => state.get(Stat::Dexterity),
        TempModifier::Intelligence => state.get(Stat::Intelligence),
        TempModifier::Focus => state.get(Stat::Focus),
        TempModifier::Perception => state.get(Stat::Sight),
        TempModifier::Memory => state.get(Stat::Memory),
    }
}

fn fraction_of(base: i32, fraction: f64) -> i32 {
    let amount = base as f64 * fraction;
    ((amount * 1e6).round() / 1e6) as i32
}

/// Stack a penalty of `fraction` of the base value
pub fn penalize(state: &mut CharacterState, modifier: TempModifier, fraction: f64) {
    let amount = fraction_of(modifier_base(state, modifier), fraction);
    state.add_temp(modifier, -amount);
}

/// Stack a willpower-resisted penalty of `fraction` of the base value
pub fn penalize_resisted(
    state: &mut CharacterState,
    modifier: TempModifier,
    fraction: f64,
    config: &EngineConfig,
) {
    let resisted = resist_penalty(fraction, state.effective_willpower(), config);
    penalize(state, modifier, resisted);
}

/// Stack a boost of `fraction` of the base value
pub fn boost(state: &mut CharacterState, modifier: TempModifier, fraction: f64) {
    let amount = fraction_of(modifier_base(state, modifier), fraction);
    state.add_temp(modifier, amount);
}

/// Wipe out all control of the body and mind for this cycle
pub fn incapacitate(state: &mut CharacterState) {
    for modifier in [
        TempModifier::Dexterity,
        TempModifier::Agility,
        TempModifier::Speed,
        TempModifier::Focus,
    ] {
        state.set_temp(modifier, -modifier.bound());
    }
}

/// Common penalties for a severe unmet need or injury
///
/// `severity` in [0, 1]. Physical offsets are not resisted; focus is resisted
/// by willpower. Endurance and willpower themselves erode with severity.
/// With `all_physical` false only endurance and the mind are affected.
pub fn apply_severe_need<R: Rng>(
    state: &mut CharacterState,
    cycle: &mut Cycle<'_, R>,
    severity: f64,
    cause: Cause,
    all_physical: bool,
) {
    cycle.suffer(state, cause);

    if all_physical {
        for modifier in [
            TempModifier::Strength,
            TempModifier::Agility,
            TempModifier::Speed,
            TempModifier::Dexterity,
        ] {
            penalize(state, modifier, severity);
        }
    }
    state.scale(Stat::Endurance, -(severity + 0.1));

    penalize_resisted(state, TempModifier::Focus, severity, cycle.config);
    state.scale(Stat::Willpower, -severity * 0.5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resistance_scales_with_willpower() {
        let config = EngineConfig::default();
        assert_eq!(willpower_resistance(0, &config), 0.0);
        // 250 / 500 * 0.5
        assert!((willpower_resistance(250, &config) - 0.25).abs() < 1e-9);
        // Full willpower hits the cap
        assert!((willpower_resistance(500, &config) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_resisted_penalty_has_floor() {
        let config = EngineConfig::default();
        let resisted = resist_penalty(0.5, 500, &config);
        assert!((resisted - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_penalties_use_base_value() {
        let mut state = CharacterState::default();
        state.set(Stat::Agility, 200);

        penalize(&mut state, TempModifier::Agility, 0.25);
        penalize(&mut state, TempModifier::Agility, 0.25);

        // Both measured against 200, not against the reduced effective value
        assert_eq!(state.temp(TempModifier::Agility), -100);
        assert_eq!(state.effective_agility(), 100);
    }

    #[test]
    fn test_strength_sized_from_stronger_half() {
        let mut state = CharacterState::default();
        state.set(Stat::UpperBodyStrength, 10_000);
        state.set(Stat::LowerBodyStrength, 400_000);

        penalize(&mut state, TempModifier::Strength, 0.5);

        assert_eq!(state.temp(TempModifier::Strength), -200_000);
        assert_eq!(state.effective_lower_body_strength(), 200_000);
        assert_eq!(state.effective_upper_body_strength(), 0);
    }

    #[test]
    fn test_perception_boost_uses_sight() {
        let mut state = CharacterState::default();
        state.set(Stat::Sight, 300);
        boost(&mut state, TempModifier::Perception, 0.5);
        assert_eq!(state.temp(TempModifier::Perception), 150);
        assert_eq!(state.effective_sight(), 450);
        assert_eq!(state.effective_hearing(), 500);
    }

    #[test]
    fn test_incapacitate() {
        let mut state = CharacterState::default();
        incapacitate(&mut state);
        assert_eq!(state.effective_dexterity(), 0);
        assert_eq!(state.effective_agility(), 0);
        assert_eq!(state.effective_speed(), 0);
        assert_eq!(state.effective_focus(), 0);
    }
}
