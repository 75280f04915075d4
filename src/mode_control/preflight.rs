use super::{MissionSequencer, OpExitSignal};
use crate::{event, info, warn};
use std::{future::Future, time::Duration};
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

impl MissionSequencer {
    const CONNECTION_LOG_PERIOD: Duration = Duration::from_millis(2500);
    const PRIMING_LOG_EVERY: usize = 20;

    /// Blocks until telemetry reports a connected autopilot. Nothing is published or
    /// commanded while waiting.
    pub async fn wait_for_connection(&self, cancel: &CancellationToken) -> OpExitSignal {
        info!("Waiting for autopilot connection...");
        let start = Instant::now() + Self::CONNECTION_LOG_PERIOD;
        let mut interval = tokio::time::interval_at(start, Self::CONNECTION_LOG_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let connected = self.telemetry.connected();
        tokio::pin!(connected);
        loop {
            tokio::select! {
                () = &mut connected => {
                    info!("Autopilot connected!");
                    return OpExitSignal::Completed;
                }
                () = cancel.cancelled() => return OpExitSignal::Cancelled,
                _ = interval.tick() => warn!("Waiting for autopilot connection..."),
            }
        }
    }

    /// Streams the initial target for a fixed number of ticks so the autopilot accepts the
    /// switch into external-control mode.
    pub async fn prime_setpoints(&mut self, cancel: &CancellationToken) -> OpExitSignal {
        let count = self.params.priming_setpoints;
        info!("Initializing setpoints...");
        let mut interval = tokio::time::interval(self.params.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        for i in 0..count {
            tokio::select! {
                () = cancel.cancelled() => return OpExitSignal::Cancelled,
                _ = interval.tick() => {}
            }
            self.stream_only();
            if i % Self::PRIMING_LOG_EVERY == 0 {
                event!("Sending initial setpoint [{}/{count}]", i + 1);
            }
        }
        OpExitSignal::Completed
    }

    /// Keeps streaming setpoints until `gate` resolves, then starts the cooldown of the
    /// first state.
    pub async fn hold_for_launch<F>(&mut self, gate: F, cancel: &CancellationToken) -> OpExitSignal
    where F: Future<Output = ()> {
        info!("Waiting for start command (press Enter)...");
        let mut interval = tokio::time::interval(self.params.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(gate);
        loop {
            tokio::select! {
                () = &mut gate => break,
                () = cancel.cancelled() => return OpExitSignal::Cancelled,
                _ = interval.tick() => self.stream_only(),
            }
        }
        info!("Launch command received!");
        self.arm_timer(Instant::now());
        OpExitSignal::Completed
    }
}
