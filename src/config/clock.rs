use super::traits::ConfigSection;
use crate::error::FibClockError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MIN_TICK_INTERVAL_MS: u64 = 100;
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub tick_interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
        }
    }
}

impl ClockConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl ConfigSection for ClockConfig {
    fn section_name() -> &'static str {
        "clock"
    }

    fn validate(&self) -> Result<(), FibClockError> {
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(FibClockError::Configuration(format!(
                "Tick interval must be between {} and {} ms",
                MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS
            )));
        }
        Ok(())
    }
}
