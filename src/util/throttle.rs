use tokio::time::Instant;
use std::time::Duration;

/// Rate limiter for repeated diagnostic output.
#[derive(Debug, Clone)]
pub struct Throttle {
    period: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub const fn new(period: Duration) -> Self { Self { period, last: None } }

    /// Returns `true` at most once per period; the first call always passes.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.period => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
