pub mod clock;
pub mod config;
pub mod error;
pub mod scale;

pub use clock::GameClock;
pub use config::{DecayRange, EngineConfig, NeedsDecayConfig};
pub use error::{Result, SimError};
