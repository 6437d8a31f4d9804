use std::time::Duration;

use crate::error::ConfigError;

/// Board size and timing of the tick loop.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dimension: usize,
    /// Ticks per second
    pub frame_rate: u32,
    /// How long the computer shows its chosen edge before claiming it
    pub computer_delay_ms: u64,
    /// How long the final score stays up before a new game starts
    pub result_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            dimension: 5,
            frame_rate: 30,
            computer_delay_ms: 500,
            result_delay_ms: 2000,
        }
    }
}

impl EngineConfig {
    /// Ticks the computer waits between staging and committing its move
    pub fn think_ticks(&self) -> u32 {
        self.ticks_for(self.computer_delay_ms)
    }

    /// Ticks the result stays on screen
    pub fn result_ticks(&self) -> u32 {
        self.ticks_for(self.result_delay_ms)
    }

    /// Wall-clock time between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    fn ticks_for(&self, delay_ms: u64) -> u32 {
        let ticks = (delay_ms * u64::from(self.frame_rate)).div_ceil(1000);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::Validation(
                "game.dimension must be >= 1".into(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Validation(
                "game.frame_rate must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
