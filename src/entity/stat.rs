//! Named, range-checked character attributes

use crate::core::scale::{HEALTH_MAX, HEALTH_MIN, MAX_LARGE, MIN_LARGE, PCT_MAX, PCT_MIN};
use serde::{Deserialize, Serialize};

/// Every clamped numeric attribute of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    // Natural aptitudes (large scale)
    Luck,
    Beauty,
    Intelligence,
    UpperBodyStrength,
    LowerBodyStrength,
    Endurance,
    Agility,
    Speed,
    Dexterity,

    // Vital signs
    Health,
    BodyTemperature,
    BloodPressure,
    HeartRate,

    // Organ integrity
    Cardiovascular,
    Respiratory,
    Neural,
    Digestive,
    Immune,

    // Senses
    Sight,
    Hearing,
    SmellTaste,

    // Needs
    Hunger,
    Thirst,
    Fatigue,
    Sleep,
    Hygiene,
    Bladder,
    Comfort,

    // Cognitive
    Memory,
    Focus,
    Willpower,
    Verbal,
    Maths,
    Knowledge,

    // Emotional
    Happiness,
    Social,
    Stress,
    Boredom,
    Confidence,
}

impl Stat {
    pub const ALL: [Stat; 39] = [
        Stat::Luck,
        Stat::Beauty,
        Stat::Intelligence,
        Stat::UpperBodyStrength,
        Stat::LowerBodyStrength,
        Stat::Endurance,
        Stat::Agility,
        Stat::Speed,
        Stat::Dexterity,
        Stat::Health,
        Stat::BodyTemperature,
        Stat::BloodPressure,
        Stat::HeartRate,
        Stat::Cardiovascular,
        Stat::Respiratory,
        Stat::Neural,
        Stat::Digestive,
        Stat::Immune,
        Stat::Sight,
        Stat::Hearing,
        Stat::SmellTaste,
        Stat::Hunger,
        Stat::Thirst,
        Stat::Fatigue,
        Stat::Sleep,
        Stat::Hygiene,
        Stat::Bladder,
        Stat::Comfort,
        Stat::Memory,
        Stat::Focus,
        Stat::Willpower,
        Stat::Verbal,
        Stat::Maths,
        Stat::Knowledge,
        Stat::Happiness,
        Stat::Social,
        Stat::Stress,
        Stat::Boredom,
        Stat::Confidence,
    ];

    /// Inclusive `(min, max)` range the attribute is clamped to
    pub fn range(&self) -> (i32, i32) {
        match self {
            Stat::Luck
            | Stat::Beauty
            | Stat::Intelligence
            | Stat::UpperBodyStrength
            | Stat::LowerBodyStrength
            | Stat::Endurance
            | Stat::Agility
            | Stat::Speed
            | Stat::Dexterity => (MIN_LARGE, MAX_LARGE),
            Stat::Health => (HEALTH_MIN, HEALTH_MAX),
            Stat::BodyTemperature => (20, 45),
            Stat::BloodPressure => (40, 300),
            Stat::HeartRate => (0, 300),
            _ => (PCT_MIN, PCT_MAX),
        }
    }

    pub fn clamp(&self, value: i32) -> i32 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stat::Luck => "luck",
            Stat::Beauty => "beauty",
            Stat::Intelligence => "intelligence",
            Stat::UpperBodyStrength => "upper_body_strength",
            Stat::LowerBodyStrength => "lower_body_strength",
            Stat::Endurance => "endurance",
            Stat::Agility => "agility",
            Stat::Speed => "speed",
            Stat::Dexterity => "dexterity",
            Stat::Health => "health",
            Stat::BodyTemperature => "body_temperature",
            Stat::BloodPressure => "blood_pressure",
            Stat::HeartRate => "heart_rate",
            Stat::Cardiovascular => "cardiovascular",
            Stat::Respiratory => "respiratory",
            Stat::Neural => "neural",
            Stat::Digestive => "digestive",
            Stat::Immune => "immune",
            Stat::Sight => "sight",
            Stat::Hearing => "hearing",
            Stat::SmellTaste => "smell_taste",
            Stat::Hunger => "hunger",
            Stat::Thirst => "thirst",
            Stat::Fatigue => "fatigue",
            Stat::Sleep => "sleep",
            Stat::Hygiene => "hygiene",
            Stat::Bladder => "bladder",
            Stat::Comfort => "comfort",
            Stat::Memory => "memory",
            Stat::Focus => "focus",
            Stat::Willpower => "willpower",
            Stat::Verbal => "verbal",
            Stat::Maths => "maths",
            Stat::Knowledge => "knowledge",
            Stat::Happiness => "happiness",
            Stat::Social => "social",
            Stat::Stress => "stress",
            Stat::Boredom => "boredom",
            Stat::Confidence => "confidence",
        }
    }

    pub fn from_name(name: &str) -> Option<Stat> {
        Stat::ALL.iter().copied().find(|s| s.name() == name)
    }
}

/// Runtime access to character attributes by field name
pub trait StatAccessor {
    /// Get a value by field name, returns None if field doesn't exist
    fn get_value(&self, field_name: &str) -> Option<i32>;

    /// Set a value by field name, returns false if field doesn't exist
    fn set_value(&mut self, field_name: &str, value: i32) -> bool;

    /// List all field names for validation
    fn field_names() -> Vec<&'static str>;
}
