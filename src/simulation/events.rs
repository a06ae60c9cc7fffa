//! Events emitted by one engine cycle, for a host's event log

use serde::{Deserialize, Serialize};

/// Why a rule band fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cause {
    ExtremeTemperature,
    SignificantTemperature,
    MildTemperature,
    NeuralDistress,
    NeuralImpairment,
    CardioRespiratoryStrain,
    CardioRespiratoryFailure,
    DigestiveWeakness,
    Infection,
    Starvation,
    Hunger,
    MildHunger,
    CriticalDehydration,
    Dehydration,
    MildThirst,
    UtterExhaustion,
    SevereFatigue,
    Fatigue,
    CriticalSleepDeprivation,
    SevereSleepDeprivation,
    SleepDeprivation,
    Drowsiness,
    CriticalInjuries,
    SignificantInjuries,
    ModerateInjuries,
    Fear,
    SevereStress,
    Stress,
    Boredom,
}

impl Cause {
    pub fn description(&self) -> &'static str {
        match self {
            Cause::ExtremeTemperature => "extreme body temperature",
            Cause::SignificantTemperature => "a dangerous body temperature",
            Cause::MildTemperature => "an uncomfortable body temperature",
            Cause::NeuralDistress => "severe neurological distress",
            Cause::NeuralImpairment => "disorientation and mental fog",
            Cause::CardioRespiratoryStrain => "a racing heart and laboured breathing",
            Cause::CardioRespiratoryFailure => "failing circulation or breathing",
            Cause::DigestiveWeakness => "a weak digestive system",
            Cause::Infection => "poor hygiene and weak immunity",
            Cause::Starvation => "starvation",
            Cause::Hunger => "hunger",
            Cause::MildHunger => "mild hunger",
            Cause::CriticalDehydration => "critical dehydration",
            Cause::Dehydration => "dehydration",
            Cause::MildThirst => "mild thirst",
            Cause::UtterExhaustion => "utter exhaustion",
            Cause::SevereFatigue => "severe fatigue",
            Cause::Fatigue => "fatigue",
            Cause::CriticalSleepDeprivation => "critical sleep deprivation",
            Cause::SevereSleepDeprivation => "severe sleep deprivation",
            Cause::SleepDeprivation => "sleep deprivation",
            Cause::Drowsiness => "drowsiness",
            Cause::CriticalInjuries => "critical injuries",
            Cause::SignificantInjuries => "significant injuries",
            Cause::ModerateInjuries => "moderate injuries",
            Cause::Fear => "intense fear",
            Cause::SevereStress => "overwhelming stress",
            Cause::Stress => "stress",
            Cause::Boredom => "boredom",
        }
    }
}

/// Something that happened to the character during a cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StateEvent {
    /// A rule band applied its effects
    Suffering { cause: Cause },
    LostConsciousness { cause: Cause },
    Seizure,
    /// Lasting base-stat damage from accumulated concussions
    PermanentNeuralDamage,
    AdrenalineRush { turns: u32 },
    AdrenalineCrash,
    Died,
}

impl StateEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, StateEvent::Died)
    }

    /// One line suitable for an in-game event log
    pub fn describe(&self, name: &str) -> String {
        match self {
            StateEvent::Suffering { cause } => {
                format!("{} is suffering from {}.", name, cause.description())
            }
            StateEvent::LostConsciousness { cause } => {
                format!("{} loses consciousness from {}!", name, cause.description())
            }
            StateEvent::Seizure => format!("{} is experiencing a seizure!", name),
            StateEvent::PermanentNeuralDamage => format!(
                "Past concussions and low neural health have left {} with lasting damage.",
                name
            ),
            StateEvent::AdrenalineRush { turns } => format!(
                "{} is overcome by fear; adrenaline surges for {} turns!",
                name, turns
            ),
            StateEvent::AdrenalineCrash => {
                format!("{}'s adrenaline wears off, leaving an intense crash.", name)
            }
            StateEvent::Died => format!("{} has died.", name),
        }
    }
}
