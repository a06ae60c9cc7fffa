//! Player actions from the game-world screen

use super::GameSession;
use crate::core::scale::MAX_LARGE;
use crate::entity::{CharacterState, Stat};
use crate::simulation::StateEvent;
use rand::Rng;
use serde::{Deserialize, Serialize};

const EXPLORE_MIN_MINUTES: i32 = 30;
const EXPLORE_MAX_MINUTES: i32 = 60;
const EXPLORE_BASE_FATIGUE: i32 = 5;
const EXPLORE_EXTRA_FATIGUE: i32 = 2;
const EXPLORE_FIND_CHANCE: f64 = 0.15;
const EXPLORE_FIND: &str = "Old Rag";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreReport {
    pub minutes: i32,
    pub fatigue_cost: i32,
    pub found: Option<String>,
    pub events: Vec<StateEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestReport {
    pub minutes: i32,
    /// Consciousness was restored on waking
    pub came_to: bool,
    pub events: Vec<StateEvent>,
}

/// Extra fatigue for below-average endurance
///
/// One point per twentieth of the large scale below its midpoint.
pub fn endurance_deficit(endurance: i32) -> i32 {
    ((MAX_LARGE / 2 - endurance) / (MAX_LARGE / 20)).max(0)
}

impl GameSession {
    /// Explore for half an hour to an hour
    ///
    /// Returns `None` when there is no character or it cannot act.
    pub fn explore(&mut self) -> Option<ExploreReport> {
        let endurance = {
            let character = self.acting_character("explore")?;
            if !character.is_conscious() {
                tracing::warn!("{} is unconscious and cannot explore", character.name());
                return None;
            }
            character.get(Stat::Endurance)
        };

        let rng = self.engine.rng_mut();
        let minutes = rng.gen_range(EXPLORE_MIN_MINUTES..=EXPLORE_MAX_MINUTES);
        let fatigue_cost = EXPLORE_BASE_FATIGUE
            + rng.gen_range(0..=EXPLORE_EXTRA_FATIGUE)
            + endurance_deficit(endurance);

        if let Some(character) = self.character.as_mut() {
            character.set_awake(true);
            character.adjust(Stat::Fatigue, fatigue_cost);
        }
        self.advance_and_decay(minutes);
        let events = self.process();

        let mut found = None;
        let still_conscious = self.character().is_some_and(CharacterState::is_conscious);
        if still_conscious && self.engine.rng_mut().gen::<f64>() < EXPLORE_FIND_CHANCE {
            if let Some(character) = self.character.as_mut() {
                character.inventory_mut().add(EXPLORE_FIND);
                tracing::info!("{} found an {}", character.name(), EXPLORE_FIND);
            }
            found = Some(EXPLORE_FIND.to_string());
        }

        tracing::debug!(
            "Explored for {} min at {} (fatigue cost {})",
            minutes,
            self.clock.formatted(),
            fatigue_cost
        );
        Some(ExploreReport {
            minutes,
            fatigue_cost,
            found,
            events,
        })
    }

    /// Sleep for `minutes`, then wake
    ///
    /// The only way an unconscious character comes to.
    pub fn rest(&mut self, minutes: i32) -> Option<RestReport> {
        if minutes <= 0 {
            tracing::warn!("Cannot rest for {} minutes", minutes);
            return None;
        }
        self.acting_character("rest")?;

        if let Some(character) = self.character.as_mut() {
            character.set_awake(false);
        }
        self.advance_and_decay(minutes);

        let mut came_to = false;
        if let Some(character) = self.character.as_mut() {
            came_to = !character.is_conscious();
            character.set_awake(true);
            if came_to {
                tracing::info!("{} regains consciousness", character.name());
            }
        }
        let events = self.process();

        Some(RestReport {
            minutes,
            came_to,
            events,
        })
    }

    /// The current character if it is alive, logging why not otherwise
    fn acting_character(&self, action: &str) -> Option<&CharacterState> {
        let Some(character) = self.character.as_ref() else {
            tracing::error!("No character to {}", action);
            return None;
        };
        if !character.is_alive() {
            tracing::warn!("{} is dead and cannot {}", character.name(), action);
            return None;
        }
        Some(character)
    }
}
