//! Engine configuration with documented constants
//!
//! The tunables that shape how harshly the state engine treats a character
//! are collected here. Band thresholds that define the rule tables live next
//! to the rules themselves; these are the knobs a designer is expected to turn.

use crate::core::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Divisor bounds for one needs-decay rate
///
/// Each decay step changes an attribute by `minutes / d` where `d` is drawn
/// uniformly from `[low, high]`. Larger divisors mean slower change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayRange {
    pub low: i32,
    pub high: i32,
}

impl DecayRange {
    pub const fn new(low: i32, high: i32) -> Self {
        Self { low, high }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.low <= 0 || self.high < self.low {
            return Err(SimError::InvalidConfig(format!(
                "{} decay range [{}, {}] must be positive and ordered",
                name, self.low, self.high
            )));
        }
        Ok(())
    }
}

/// Rates for the low-frequency needs decay applied as game time passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NeedsDecayConfig {
    /// Restedness recovered while asleep (one point per 5-10 minutes)
    pub sleep_recovery: DecayRange,

    /// Fatigue shed while asleep (one point per 10-20 minutes)
    pub fatigue_recovery: DecayRange,

    /// Fatigue gained while awake (one point per 45-75 minutes)
    pub fatigue_gain: DecayRange,

    /// Hunger satiation lost (one point per 20-30 minutes)
    pub hunger: DecayRange,

    /// Hydration lost (one point per 15-25 minutes)
    pub thirst: DecayRange,

    /// Hygiene lost (one point per 2-3 hours)
    pub hygiene: DecayRange,

    /// Bladder filled (one point per 1.5-2.5 hours)
    pub bladder: DecayRange,
}

impl Default for NeedsDecayConfig {
    fn default() -> Self {
        Self {
            sleep_recovery: DecayRange::new(5, 10),
            fatigue_recovery: DecayRange::new(10, 20),
            fatigue_gain: DecayRange::new(45, 75),
            hunger: DecayRange::new(20, 30),
            thirst: DecayRange::new(15, 25),
            hygiene: DecayRange::new(120, 180),
            bladder: DecayRange::new(90, 150),
        }
    }
}

/// Configuration for the per-cycle state engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === WILLPOWER RESISTANCE ===
    /// Weight applied to the willpower ratio when attenuating penalties
    ///
    /// A character at full willpower resists `weight` of a mental penalty,
    /// before the cap below is applied.
    pub resistance_weight: f64,

    /// Maximum fraction of a penalty that willpower can absorb
    ///
    /// Must stay below 1.0 so a penalty is never fully negated.
    pub resistance_cap: f64,

    // === ORGANS ===
    /// Chance per cycle of a seizure while neural integrity is critical
    pub seizure_chance: f64,

    // === FORCED COLLAPSE ===
    /// Chance per cycle of fainting while critically dehydrated
    pub dehydration_faint_chance: f64,

    /// Chance per cycle of collapsing while utterly exhausted
    pub exhaustion_collapse_chance: f64,

    /// Chance per cycle of collapsing while critically sleep deprived
    pub sleep_deprivation_collapse_chance: f64,

    /// Health ratio under which a still-conscious character blacks out
    pub health_blackout_ratio: f64,

    // === ADRENALINE ===
    /// Confidence ratio under which fear triggers an adrenaline rush
    pub adrenaline_trigger_ratio: f64,

    /// Shortest rush, in cycles
    pub adrenaline_min_turns: u32,

    /// Longest rush, in cycles
    pub adrenaline_max_turns: u32,

    /// Fatigue added when a rush wears off
    pub adrenaline_crash_fatigue: i32,

    /// Fatigue added every cycle a rush is active
    pub adrenaline_upkeep_fatigue: i32,

    // === NEEDS DECAY ===
    pub needs_decay: NeedsDecayConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            resistance_weight: 0.5,
            resistance_cap: 0.4,

            seizure_chance: 0.25,

            dehydration_faint_chance: 0.20,
            exhaustion_collapse_chance: 0.10,
            sleep_deprivation_collapse_chance: 0.15,
            health_blackout_ratio: 0.05,

            adrenaline_trigger_ratio: 0.10,
            adrenaline_min_turns: 3,
            adrenaline_max_turns: 5,
            adrenaline_crash_fatigue: 50,
            adrenaline_upkeep_fatigue: 10,

            needs_decay: NeedsDecayConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.resistance_cap) {
            return Err(SimError::InvalidConfig(format!(
                "resistance_cap ({}) must be in [0, 1)",
                self.resistance_cap
            )));
        }
        if self.resistance_weight < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "resistance_weight ({}) must not be negative",
                self.resistance_weight
            )));
        }

        let chances = [
            ("seizure_chance", self.seizure_chance),
            ("dehydration_faint_chance", self.dehydration_faint_chance),
            ("exhaustion_collapse_chance", self.exhaustion_collapse_chance),
            (
                "sleep_deprivation_collapse_chance",
                self.sleep_deprivation_collapse_chance,
            ),
            ("health_blackout_ratio", self.health_blackout_ratio),
            ("adrenaline_trigger_ratio", self.adrenaline_trigger_ratio),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidConfig(format!(
                    "{} ({}) must be in [0, 1]",
                    name, value
                )));
            }
        }

        if self.adrenaline_min_turns == 0 || self.adrenaline_max_turns < self.adrenaline_min_turns
        {
            return Err(SimError::InvalidConfig(format!(
                "adrenaline turns [{}, {}] must be positive and ordered",
                self.adrenaline_min_turns, self.adrenaline_max_turns
            )));
        }

        let decay = &self.needs_decay;
        decay.sleep_recovery.validate("sleep_recovery")?;
        decay.fatigue_recovery.validate("fatigue_recovery")?;
        decay.fatigue_gain.validate("fatigue_gain")?;
        decay.hunger.validate("hunger")?;
        decay.thirst.validate("thirst")?;
        decay.hygiene.validate("hygiene")?;
        decay.bladder.validate("bladder")?;

        Ok(())
    }
}
