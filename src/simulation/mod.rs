pub mod emotion;
pub mod engine;
pub mod environment;
pub mod events;
pub mod health;
pub mod mood;
pub mod need_effects;
pub mod organs;
pub mod penalties;

pub use engine::StateEngine;
pub use events::{Cause, StateEvent};
pub use penalties::{resist_penalty, willpower_resistance};
