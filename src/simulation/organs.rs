//! Organ integrity effects

use crate::core::scale::pct_ratio;
use crate::entity::{CharacterState, Stat, TempModifier};
use crate::simulation::engine::Cycle;
use crate::simulation::events::{Cause, StateEvent};
use crate::simulation::penalties::{incapacitate, penalize};
use rand::Rng;

const NEURAL_CRITICAL: f64 = 0.15;
const NEURAL_IMPAIRED: f64 = 0.40;
/// Concussions leave lasting damage only below this neural ratio
const CONCUSSION_DAMAGE_RATIO: f64 = 0.20;
const CONCUSSION_DAMAGE_COUNT: u32 = 2;

const CARDIO_STRAINED: f64 = 0.30;
const CARDIO_FAILING: f64 = 0.10;

const DIGESTIVE_WEAK: f64 = 0.20;
const IMMUNE_WEAK: f64 = 0.20;
const HYGIENE_POOR: f64 = 0.20;

pub fn apply_organ_integrity<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    apply_neural(state, cycle);
    apply_cardio_respiratory(state, cycle);

    if pct_ratio(state.get(Stat::Digestive)) < DIGESTIVE_WEAK {
        cycle.suffer(state, Cause::DigestiveWeakness);
        state.scale(Stat::Hunger, -0.15);
    }

    if pct_ratio(state.get(Stat::Immune)) < IMMUNE_WEAK
        && pct_ratio(state.get(Stat::Hygiene)) < HYGIENE_POOR
    {
        cycle.suffer(state, Cause::Infection);
        state.adjust(Stat::Health, -1);
    }
}

fn apply_neural<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let neural = pct_ratio(state.get(Stat::Neural));

    if neural >= NEURAL_CRITICAL {
        state.set_experiencing_seizure(false);
        if neural < NEURAL_IMPAIRED {
            cycle.suffer(state, Cause::NeuralImpairment);
            penalize(state, TempModifier::Focus, 0.25);
            penalize(state, TempModifier::Intelligence, 0.15);
            penalize(state, TempModifier::Memory, 0.20);
        }
        return;
    }

    cycle.suffer(state, Cause::NeuralDistress);
    let seizure = cycle.roll(cycle.config.seizure_chance);
    state.set_experiencing_seizure(seizure);

    if seizure {
        tracing::info!("{} is experiencing a seizure", state.name());
        cycle.emit(StateEvent::Seizure);
        cycle.knock_out(state, Cause::NeuralDistress);
        incapacitate(state);
        state.scale(Stat::Neural, -0.05);
        state.adjust(Stat::Health, -5);
    } else {
        penalize(state, TempModifier::Dexterity, 0.70);
        penalize(state, TempModifier::Agility, 0.70);
        penalize(state, TempModifier::Focus, 0.60);
        penalize(state, TempModifier::Intelligence, 0.50);
    }
    state.adjust(Stat::Stress, 30);
    state.scale(Stat::Happiness, -0.40);

    if state.concussion_count() > CONCUSSION_DAMAGE_COUNT && neural < CONCUSSION_DAMAGE_RATIO {
        tracing::info!(
            "{}: past concussions and low neural health caused lasting damage",
            state.name()
        );
        state.scale(Stat::Intelligence, -0.01);
        state.scale(Stat::Memory, -0.01);
        state.set_concussion_count(0);
        cycle.emit(StateEvent::PermanentNeuralDamage);
    }
}

fn apply_cardio_respiratory<R: Rng>(state: &mut CharacterState, cycle: &mut Cycle<'_, R>) {
    let cardio = pct_ratio(state.get(Stat::Cardiovascular));
    let respiratory = pct_ratio(state.get(Stat::Respiratory));
    let worst = cardio.min(respiratory);

    if worst >= CARDIO_STRAINED {
        return;
    }

    cycle.suffer(state, Cause::CardioRespiratoryStrain);
    state.scale(Stat::Endurance, -0.30);
    state.adjust(Stat::Fatigue, 10);
    state.adjust(Stat::Stress, 10);

    if worst < CARDIO_FAILING {
        cycle.suffer(state, Cause::CardioRespiratoryFailure);
        state.adjust(Stat::Health, -2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run(state: &mut CharacterState, config: &EngineConfig) -> Vec<StateEvent> {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut events = Vec::new();
        let mut cycle = Cycle {
            config,
            rng: &mut rng,
            events: &mut events,
        };
        apply_organ_integrity(state, &mut cycle);
        events
    }

    #[test]
    fn test_certain_seizure() {
        let config = EngineConfig {
            seizure_chance: 1.0,
            ..EngineConfig::default()
        };
        let mut state = CharacterState::default();
        state.set(Stat::Neural, 50);

        let events = run(&mut state, &config);

        assert!(state.is_experiencing_seizure());
        assert!(!state.is_conscious());
        assert_eq!(state.effective_dexterity(), 0);
        assert_eq!(state.effective_focus(), 0);
        assert_eq!(state.health(), 95);
        assert!(state.get(Stat::Neural) < 50);
        assert!(events.contains(&StateEvent::Seizure));
    }

    #[test]
    fn test_critical_without_seizure() {
        let config = EngineConfig {
            seizure_chance: 0.0,
            ..EngineConfig::default()
        };
        let mut state = CharacterState::default();
        state.set(Stat::Neural, 50);

        let events = run(&mut state, &config);

        assert!(!state.is_experiencing_seizure());
        assert!(state.is_conscious());
        assert_eq!(state.temp(TempModifier::Dexterity), -35);
        assert_eq!(state.temp(TempModifier::Intelligence), -25);
        assert_eq!(state.get(Stat::Stress), 30);
        assert!(!events.contains(&StateEvent::Seizure));
    }

    #[test]
    fn test_impaired_band_is_milder() {
        let mut state = CharacterState::default();
        state.set(Stat::Neural, 150);

        run(&mut state, &EngineConfig::default());

        assert_eq!(state.temp(TempModifier::Dexterity), 0);
        assert_eq!(state.temp(TempModifier::Memory), -50);
        assert_eq!(state.get(Stat::Stress), 0);
    }

    #[test]
    fn test_concussions_consumed_by_damage() {
        let config = EngineConfig {
            seizure_chance: 0.0,
            ..EngineConfig::default()
        };
        let mut state = CharacterState::default();
        state.set(Stat::Neural, 50);
        state.set(Stat::Intelligence, 1000);
        for _ in 0..3 {
            state.add_concussion();
        }

        let events = run(&mut state, &config);

        assert_eq!(state.concussion_count(), 0);
        assert_eq!(state.get(Stat::Intelligence), 990);
        assert!(events.contains(&StateEvent::PermanentNeuralDamage));
    }

    #[test]
    fn test_failing_heart_drains_health() {
        let mut state = CharacterState::default();
        state.set(Stat::Respiratory, 25);

        run(&mut state, &EngineConfig::default());

        assert_eq!(state.health(), 98);
        assert_eq!(state.get(Stat::Fatigue), 10);
        assert_eq!(state.get(Stat::Endurance), 35);
    }

    #[test]
    fn test_infection_needs_both_weaknesses() {
        let mut state = CharacterState::default();
        state.set(Stat::Immune, 50);
        run(&mut state, &EngineConfig::default());
        assert_eq!(state.health(), 100);

        state.set(Stat::Hygiene, 50);
        run(&mut state, &EngineConfig::default());
        assert_eq!(state.health(), 99);
    }

    #[test]
    fn test_weak_digestion_speeds_hunger() {
        let mut state = CharacterState::default();
        state.set(Stat::Digestive, 10);
        run(&mut state, &EngineConfig::default());
        assert_eq!(state.get(Stat::Hunger), 340);
    }
}
