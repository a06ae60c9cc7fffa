pub mod character;
pub mod identity;
pub mod inventory;
pub mod modifiers;
pub mod mood;
pub mod needs;
pub mod stat;

pub use character::CharacterState;
pub use identity::{BloodType, BodyType, Identity, Sex};
pub use inventory::Inventory;
pub use modifiers::{TempModifier, TempModifiers};
pub use mood::Mood;
pub use stat::{Stat, StatAccessor};
