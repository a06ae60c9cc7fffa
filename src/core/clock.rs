//! In-game clock
//!
//! Tracks day/hour/minute for labelling the time that passes between
//! engine cycles. The engine itself never reads the clock.

use serde::{Deserialize, Serialize};
use std::fmt;

const MINUTES_IN_HOUR: u32 = 60;
const HOURS_IN_DAY: u32 = 24;
const START_DAY: u32 = 1;
const START_HOUR: u32 = 8;
const START_MINUTE: u32 = 0;

/// Monotonic game clock, starting on Day 1 at 08:00
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    day: u32,
    hour: u32,
    minute: u32,
}

impl GameClock {
    pub fn new() -> Self {
        Self {
            day: START_DAY,
            hour: START_HOUR,
            minute: START_MINUTE,
        }
    }

    /// Advance by `minutes`, rolling over hours and days
    ///
    /// Negative input is rejected with a warning and leaves the clock untouched.
    pub fn advance(&mut self, minutes: i32) {
        if minutes < 0 {
            tracing::warn!("Cannot advance clock by negative minutes ({})", minutes);
            return;
        }

        let total = self.minute + minutes as u32;
        self.minute = total % MINUTES_IN_HOUR;

        let hours = self.hour + total / MINUTES_IN_HOUR;
        self.hour = hours % HOURS_IN_DAY;
        self.day += hours / HOURS_IN_DAY;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!("Game clock reset to {}", self);
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// "Day D - HH:MM"
    pub fn formatted(&self) -> String {
        self.to_string()
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {} - {:02}:{:02}", self.day, self.hour, self.minute)
    }
}
