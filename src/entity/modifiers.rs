//! Per-cycle temporary stat offsets

use crate::core::scale::{MAX_LARGE, PCT_MAX};

/// Stats that can carry a temporary offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TempModifier {
    /// Applies to both upper and lower body strength
    Strength,
    Agility,
    Speed,
    Dexterity,
    Intelligence,
    Focus,
    /// Applies to sight and hearing
    Perception,
    Memory,
}

impl TempModifier {
    pub const ALL: [TempModifier; 8] = [
        TempModifier::Strength,
        TempModifier::Agility,
        TempModifier::Speed,
        TempModifier::Dexterity,
        TempModifier::Intelligence,
        TempModifier::Focus,
        TempModifier::Perception,
        TempModifier::Memory,
    ];

    /// Largest magnitude an offset may reach, matching the target stat's scale
    pub fn bound(&self) -> i32 {
        match self {
            TempModifier::Strength
            | TempModifier::Agility
            | TempModifier::Speed
            | TempModifier::Dexterity
            | TempModifier::Intelligence => MAX_LARGE,
            TempModifier::Focus | TempModifier::Perception | TempModifier::Memory => PCT_MAX,
        }
    }
}

/// Additive offsets applied on top of base stats for the current cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TempModifiers {
    strength: i32,
    agility: i32,
    speed: i32,
    dexterity: i32,
    intelligence: i32,
    focus: i32,
    perception: i32,
    memory: i32,
}

impl TempModifiers {
    pub fn get(&self, modifier: TempModifier) -> i32 {
        match modifier {
            TempModifier::Strength => self.strength,
            TempModifier::Agility => self.agility,
            TempModifier::Speed => self.speed,
            TempModifier::Dexterity => self.dexterity,
            TempModifier::Intelligence => self.intelligence,
            TempModifier::Focus => self.focus,
            TempModifier::Perception => self.perception,
            TempModifier::Memory => self.memory,
        }
    }

    /// Set an offset, clamped to `[-bound, bound]`
    pub fn set(&mut self, modifier: TempModifier, value: i32) {
        let bound = modifier.bound();
        let value = value.clamp(-bound, bound);
        match modifier {
            TempModifier::Strength => self.strength = value,
            TempModifier::Agility => self.agility = value,
            TempModifier::Speed => self.speed = value,
            TempModifier::Dexterity => self.dexterity = value,
            TempModifier::Intelligence => self.intelligence = value,
            TempModifier::Focus => self.focus = value,
            TempModifier::Perception => self.perception = value,
            TempModifier::Memory => self.memory = value,
        }
    }

    /// Stack `delta` onto an offset
    pub fn add(&mut self, modifier: TempModifier, delta: i32) {
        self.set(modifier, self.get(modifier).saturating_add(delta));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}
