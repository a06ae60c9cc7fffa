//! Needs decay as game time passes

use crate::core::config::{DecayRange, NeedsDecayConfig};
use crate::entity::character::CharacterState;
use crate::entity::stat::Stat;
use rand::Rng;

impl CharacterState {
    /// Decay needs over `minutes` of game time
    ///
    /// Metabolism runs at half speed while unconscious or asleep. Sleeping
    /// restores restedness and sheds fatigue; being awake builds fatigue.
    /// Hunger and thirst drain regardless of consciousness.
    pub fn update_needs<R: Rng>(&mut self, minutes: i32, rates: &NeedsDecayConfig, rng: &mut R) {
        if !self.is_alive() {
            return;
        }
        if minutes < 0 {
            tracing::warn!(
                "{}: ignoring needs update for negative duration ({} min)",
                self.name(),
                minutes
            );
            return;
        }
        if minutes == 0 {
            return;
        }

        let effective_minutes = if !self.is_conscious() || !self.is_awake() {
            ((minutes as f64 / 2.0).round() as i32).max(1)
        } else {
            minutes
        };

        if self.is_asleep() {
            self.adjust(Stat::Sleep, step(minutes, rates.sleep_recovery, rng));
            self.adjust(Stat::Fatigue, -step(minutes, rates.fatigue_recovery, rng));
        } else if self.is_awake() {
            self.adjust(Stat::Fatigue, step(effective_minutes, rates.fatigue_gain, rng));
        }

        self.adjust(Stat::Hunger, -step(effective_minutes, rates.hunger, rng));
        self.adjust(Stat::Thirst, -step(effective_minutes, rates.thirst, rng));
        self.adjust(Stat::Hygiene, -step(effective_minutes, rates.hygiene, rng));
        self.adjust(Stat::Bladder, step(effective_minutes, rates.bladder, rng));

        tracing::debug!(
            "{}: needs after {} min (effective {}): hunger {}, thirst {}, fatigue {}, sleep {}",
            self.name(),
            minutes,
            effective_minutes,
            self.get(Stat::Hunger),
            self.get(Stat::Thirst),
            self.get(Stat::Fatigue),
            self.get(Stat::Sleep)
        );
    }
}

/// Points changed over `minutes` at a randomized rate
fn step<R: Rng>(minutes: i32, range: DecayRange, rng: &mut R) -> i32 {
    let divisor = rng.gen_range(range.low..=range.high).max(1);
    minutes / divisor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rates() -> NeedsDecayConfig {
        NeedsDecayConfig::default()
    }

    #[test]
    fn test_awake_builds_fatigue_and_drains_needs() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut c = CharacterState::default();

        c.update_needs(120, &rates(), &mut rng);

        // 120 / [45, 75] is at least 1
        assert!(c.get(Stat::Fatigue) >= 1);
        // 120 / [20, 30] is at least 4
        assert!(c.get(Stat::Hunger) <= 396);
        // 120 / [15, 25] is at least 4
        assert!(c.get(Stat::Thirst) <= 396);
        assert_eq!(c.get(Stat::Sleep), 500);
    }

    #[test]
    fn test_sleep_restores() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut c = CharacterState::default();
        c.set(Stat::Sleep, 100);
        c.set(Stat::Fatigue, 300);
        c.set_awake(false);

        c.update_needs(120, &rates(), &mut rng);

        // 120 / [5, 10] >= 12 and 120 / [10, 20] >= 6
        assert!(c.get(Stat::Sleep) >= 112);
        assert!(c.get(Stat::Fatigue) <= 294);
    }

    #[test]
    fn test_unconscious_metabolism_is_halved() {
        let mut rates = rates();
        rates.hunger = DecayRange::new(10, 10);
        rates.thirst = DecayRange::new(10, 10);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut c = CharacterState::default();
        c.set_conscious(false);

        c.update_needs(100, &rates, &mut rng);

        // 50 effective minutes at one point per 10
        assert_eq!(c.get(Stat::Hunger), 395);
        assert_eq!(c.get(Stat::Thirst), 395);
        // Unconscious: no fatigue change either way
        assert_eq!(c.get(Stat::Fatigue), 0);
    }

    #[test]
    fn test_halving_keeps_at_least_one_minute() {
        let mut rates = rates();
        rates.hunger = DecayRange::new(1, 1);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut c = CharacterState::default();
        c.set_conscious(false);

        c.update_needs(1, &rates, &mut rng);
        assert_eq!(c.get(Stat::Hunger), 399);
    }

    #[test]
    fn test_no_time_or_dead_is_noop() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut c = CharacterState::default();
        let before = c.clone();

        c.update_needs(0, &rates(), &mut rng);
        c.update_needs(-60, &rates(), &mut rng);
        assert_eq!(c, before);

        c.set_alive(false);
        let dead = c.clone();
        c.update_needs(600, &rates(), &mut rng);
        assert_eq!(c, dead);
    }
}
