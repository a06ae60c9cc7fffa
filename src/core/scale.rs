//! Attribute scales shared by the character model and the engine

/// Upper bound of the large aptitude scale (luck, strength, intelligence...)
pub const MAX_LARGE: i32 = 1_000_000;
pub const MIN_LARGE: i32 = 0;

/// Upper bound of the percentage-like scale (organs, needs, mind)
pub const PCT_MAX: i32 = 500;
pub const PCT_MIN: i32 = 0;

pub const HEALTH_MAX: i32 = 100;
pub const HEALTH_MIN: i32 = 0;

/// Species-normal body temperature in degrees Celsius
pub const NORMAL_BODY_TEMPERATURE: i32 = 37;

/// Ratio of a percentage-scale value to `PCT_MAX`
pub fn pct_ratio(value: i32) -> f64 {
    value as f64 / PCT_MAX as f64
}

/// Ratio of a health value to `HEALTH_MAX`
pub fn health_ratio(value: i32) -> f64 {
    value as f64 / HEALTH_MAX as f64
}
