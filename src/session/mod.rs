//! Game session - the clock, the current character and the engine
//!
//! Owned by the host instead of living in a global. The character is
//! optional so the host can return to a menu without tearing down the
//! session.

pub mod actions;

pub use actions::{ExploreReport, RestReport};

use crate::core::clock::GameClock;
use crate::core::config::EngineConfig;
use crate::core::error::Result;
use crate::entity::{BodyType, CharacterState, Sex};
use crate::simulation::{StateEngine, StateEvent};
use serde::{Deserialize, Serialize};

/// Serialized form of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionSnapshot {
    clock: GameClock,
    character: Option<CharacterState>,
}

pub struct GameSession {
    clock: GameClock,
    character: Option<CharacterState>,
    engine: StateEngine,
}

impl GameSession {
    /// Session with a validated config and an optional fixed seed
    pub fn new(config: EngineConfig, seed: Option<u64>) -> Result<Self> {
        let engine = match seed {
            Some(seed) => StateEngine::with_seed(config, seed)?,
            None => StateEngine::new(config)?,
        };
        Ok(Self {
            clock: GameClock::new(),
            character: None,
            engine,
        })
    }

    /// Start over with a freshly created character
    pub fn new_game(&mut self, name: &str, sex: Sex, body_type: BodyType) -> &mut CharacterState {
        self.clock.reset();
        let character = CharacterState::new(name, sex, body_type);
        tracing::info!("New game started for {}", character.name());
        self.character.insert(character)
    }

    /// Drop the current character, e.g. on return to the main menu
    pub fn clear_character(&mut self) {
        if let Some(character) = self.character.take() {
            tracing::debug!("Cleared character {}", character.name());
        }
    }

    pub fn character(&self) -> Option<&CharacterState> {
        self.character.as_ref()
    }

    pub fn character_mut(&mut self) -> Option<&mut CharacterState> {
        self.character.as_mut()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn engine(&self) -> &StateEngine {
        &self.engine
    }

    /// Let game time pass: the clock moves and needs decay
    ///
    /// The clock advances even without a character.
    pub fn advance_and_decay(&mut self, minutes: i32) {
        self.clock.advance(minutes);
        if let Some(character) = self.character.as_mut() {
            self.engine.advance_and_decay(character, minutes);
        }
    }

    /// Run one engine cycle on the current character
    pub fn process(&mut self) -> Vec<StateEvent> {
        match self.character.as_mut() {
            Some(character) => self.engine.process(character),
            None => {
                tracing::error!("No character to process");
                Vec::new()
            }
        }
    }

    /// Snapshot the clock and character as JSON
    pub fn to_json(&self) -> Result<String> {
        let snapshot = SessionSnapshot {
            clock: self.clock,
            character: self.character.clone(),
        };
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }

    /// Restore a session from a snapshot
    ///
    /// The character is rehydrated and the engine gets a fresh generator.
    pub fn from_json(json: &str, config: EngineConfig, seed: Option<u64>) -> Result<Self> {
        let snapshot: SessionSnapshot = serde_json::from_str(json)?;
        let mut session = Self::new(config, seed)?;
        session.clock = snapshot.clock;
        session.character = snapshot.character.map(|mut character| {
            character.rehydrate();
            character
        });
        tracing::info!("Session restored at {}", session.clock.formatted());
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Stat, TempModifier};

    fn session() -> GameSession {
        GameSession::new(EngineConfig::default(), Some(42)).unwrap()
    }

    #[test]
    fn test_new_game_resets_clock() {
        let mut session = session();
        session.advance_and_decay(600);
        assert_eq!(session.clock().hour(), 18);

        session.new_game("Ash", Sex::Female, BodyType::Mesomorph);

        assert_eq!(session.clock().formatted(), "Day 1 - 08:00");
        assert_eq!(session.character().unwrap().name(), "Ash");
    }

    #[test]
    fn test_process_without_character_is_noop() {
        let mut session = session();
        assert!(session.process().is_empty());
    }

    #[test]
    fn test_clear_character() {
        let mut session = session();
        session.new_game("Ash", Sex::Female, BodyType::Ectomorph);
        session.clear_character();
        assert!(session.character().is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            resistance_cap: 1.5,
            ..EngineConfig::default()
        };
        assert!(GameSession::new(config, None).is_err());
    }

    #[test]
    fn test_snapshot_roundtrip_drops_transients() {
        let mut session = session();
        session.advance_and_decay(90);
        let character = session.new_game("Ash", Sex::Male, BodyType::Ectomorph);
        character.set(Stat::Hunger, 123);
        character.set_temp(TempModifier::Focus, -40);
        character.set_experiencing_seizure(true);

        let json = session.to_json().unwrap();
        let restored = GameSession::from_json(&json, EngineConfig::default(), Some(7)).unwrap();

        let character = restored.character().unwrap();
        assert_eq!(character.get(Stat::Hunger), 123);
        assert!(character.modifiers().is_clear());
        assert!(!character.is_experiencing_seizure());
        assert_eq!(restored.clock(), session.clock());
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        assert!(GameSession::from_json("{not json", EngineConfig::default(), None).is_err());
    }
}
