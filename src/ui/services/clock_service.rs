use crate::engines::clock::{ClockEngine, SystemTimeSource, TimeSource};
use crate::ui::services::ConfigBridge;
use crate::ui::state::AppState;
use std::time::{Duration, Instant};

/// Drives the clock engine at the configured tick period
pub struct ClockService<S: TimeSource = SystemTimeSource> {
    engine: ClockEngine<S>,
    last_tick: Option<Instant>,
}

impl ClockService<SystemTimeSource> {
    pub fn system() -> Self {
        Self::new(ClockEngine::system())
    }
}

impl<S: TimeSource> ClockService<S> {
    pub fn new(engine: ClockEngine<S>) -> Self {
        Self {
            engine,
            last_tick: None,
        }
    }

    pub fn is_due(&self, now: Instant, interval: Duration) -> bool {
        match self.last_tick {
            Some(last) => now.saturating_duration_since(last) >= interval,
            None => true,
        }
    }

    /// Recompute the reading if a tick is due or a refresh was requested.
    /// Returns true when the reading changed.
    pub fn poll(&mut self, now: Instant, state: &mut AppState) -> bool {
        let interval = ConfigBridge::to_clock_config(state).tick_interval();
        if !state.force_refresh && !self.is_due(now, interval) {
            return false;
        }

        let display = ConfigBridge::to_display_config(state);
        state.reading = Some(self.engine.tick(&display));
        state.force_refresh = false;
        self.last_tick = Some(now);
        true
    }

    /// Time left until the next tick is due
    pub fn until_next_tick(&self, now: Instant, interval: Duration) -> Duration {
        match self.last_tick {
            Some(last) => interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}
