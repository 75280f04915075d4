use super::MissionState;
use crate::mission_config::Cooldowns;
use std::time::Duration;
use tokio::time::Instant;

/// Cooldown gate for command attempts in the active [`MissionState`].
///
/// The window belongs to the state, not the command type: a mode change and the following
/// arm request in `READY_TO_FLY` share one timer.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    cooldowns: Cooldowns,
    state: MissionState,
    entered: Instant,
    last_attempt: Instant,
    attempts: u32,
}

impl RetryPolicy {
    pub fn new(cooldowns: Cooldowns, state: MissionState, now: Instant) -> Self {
        Self { cooldowns, state, entered: now, last_attempt: now, attempts: 0 }
    }

    /// Resets the window for a newly entered state.
    pub fn enter(&mut self, state: MissionState, now: Instant) {
        self.state = state;
        self.entered = now;
        self.last_attempt = now;
        self.attempts = 0;
    }

    /// `true` iff `state` is the tracked state, it issues commands at all, and no attempt
    /// (or the state entry) happened within its cooldown.
    pub fn should_attempt(&self, state: MissionState, now: Instant) -> bool {
        if state != self.state {
            return false;
        }
        state
            .cooldown(&self.cooldowns)
            .is_some_and(|cd| now.saturating_duration_since(self.last_attempt) >= cd)
    }

    pub fn record_attempt(&mut self, now: Instant) {
        self.last_attempt = now;
        self.attempts = self.attempts.saturating_add(1);
    }

    pub fn attempts(&self) -> u32 { self.attempts }
    pub fn time_in_state(&self, now: Instant) -> Duration { now.saturating_duration_since(self.entered) }
}
