//! Survival Sim - character physiology and psychology engine
//!
//! A `CharacterState` holds every attribute of one character. The
//! `StateEngine` advances it one cycle at a time: needs decay as game time
//! passes, then the rule groups turn the raw numbers into penalties,
//! unconsciousness, moods and eventually death. `GameSession` ties a
//! character to a game clock for hosts like the terminal front end.

pub mod core;
pub mod entity;
pub mod session;
pub mod simulation;
