use super::{
    ArrivalPredicate, HoldPhase, MissionContext, MissionParams, MissionState, MissionStatus,
    OpExitSignal, TickSignal,
};
use crate::flight_control::{
    ChannelError, CommandChannel, CommandOutcome, CommandResponse, TelemetryCache, VehicleState,
};
use crate::mission_config::MissionConfig;
use crate::{error, info, log, warn};
use std::{future::Future, sync::Arc};
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// Drives the autopilot through `READY_TO_FLY -> TAKE_OFF -> GO_TO_POINT -> LAND -> DONE`.
///
/// Each [`tick`](Self::tick) publishes the active setpoint first, then evaluates the current
/// state and issues at most one command. Holds (takeoff settle, waypoint dwell) never block
/// the loop, and the setpoint keeps being published at the tick rate while a command is
/// in flight.
pub struct MissionSequencer {
    pub(super) channel: Arc<dyn CommandChannel>,
    pub(super) telemetry: Arc<TelemetryCache>,
    pub(super) arrival: Box<dyn ArrivalPredicate>,
    pub(super) params: MissionParams,
    pub(super) ctx: MissionContext,
}

impl MissionSequencer {
    pub fn new(
        conf: &MissionConfig,
        channel: Arc<dyn CommandChannel>,
        telemetry: Arc<TelemetryCache>,
        arrival: Box<dyn ArrivalPredicate>,
        now: Instant,
    ) -> Self {
        Self {
            channel,
            telemetry,
            arrival,
            params: MissionParams::from(conf),
            ctx: MissionContext::new(conf, now),
        }
    }

    pub fn state(&self) -> MissionState { self.ctx.state() }
    #[cfg(test)]
    pub fn context(&self) -> &MissionContext { &self.ctx }
    pub fn status(&self, now: Instant) -> MissionStatus { self.ctx.status(now) }

    /// Restarts the cooldown of the current state, e.g. when the launch gate opens.
    pub fn arm_timer(&mut self, now: Instant) { self.ctx.retry.enter(self.ctx.state, now); }

    /// Publishes the active target without evaluating the state machine.
    pub fn stream_only(&mut self) { self.ctx.streamer.tick(self.channel.as_ref()); }

    /// Runs one control cycle at time `now`.
    pub async fn tick(&mut self, now: Instant) -> TickSignal {
        let telemetry = self.telemetry.read();
        self.stream_only();
        self.print_status(now);

        if self.ctx.state.is_terminal() {
            return TickSignal::Done;
        }
        if !telemetry.connected() {
            if self.ctx.link_throttle.ready(now) {
                warn!("Autopilot link lost in {}, holding without commands!", self.ctx.state);
            }
            return TickSignal::Continue;
        }

        match self.ctx.state {
            MissionState::ReadyToFly => self.ready_to_fly(&telemetry, now).await,
            MissionState::TakeOff => self.take_off(&telemetry, now).await,
            MissionState::GoToPoint => self.go_to_point(&telemetry, now),
            MissionState::Land => self.land(now).await,
            MissionState::Done => {}
        }

        if self.ctx.state.is_terminal() {
            warn!("Mission complete");
            TickSignal::Done
        } else {
            TickSignal::Continue
        }
    }

    /// Ticks at the configured setpoint rate until the mission is done or `cancel` fires.
    ///
    /// An in-flight command exchange is always awaited; cancellation is only observed between
    /// ticks.
    pub async fn run(&mut self, cancel: &CancellationToken) -> OpExitSignal {
        let mut interval = tokio::time::interval(self.params.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    warn!("Shutdown requested in {}!", self.ctx.state);
                    return OpExitSignal::Cancelled;
                }
                _ = interval.tick() => {}
            }
            if self.tick(Instant::now()).await == TickSignal::Done {
                return OpExitSignal::Completed;
            }
        }
    }

    async fn ready_to_fly(&mut self, telemetry: &VehicleState, now: Instant) {
        let state = MissionState::ReadyToFly;
        let mode = self.params.control_mode.clone();
        if telemetry.mode() == mode && telemetry.armed() {
            info!("Vehicle already armed in {mode}");
            self.advance(now);
            return;
        }
        if !self.ctx.retry.should_attempt(state, now) {
            return;
        }
        if telemetry.mode() == mode {
            warn!("Attempting arming...");
            let channel = Arc::clone(&self.channel);
            let res = self.stream_while(channel.request_arm(true)).await;
            if self.record(now, "Arming", &res).is_accepted() {
                warn!("Vehicle armed");
                self.advance(now);
            }
        } else {
            warn!("Attempting to switch from {} to {mode}", display_mode(telemetry));
            let channel = Arc::clone(&self.channel);
            let res = self.stream_while(channel.request_mode_change(&mode)).await;
            if self.record(now, "Mode change", &res).is_accepted() {
                warn!("{mode} enabled");
            }
        }
    }

    async fn take_off(&mut self, telemetry: &VehicleState, now: Instant) {
        if let Some(since) = self.ctx.held_since {
            let target = self.ctx.streamer.target();
            if self.arrival.has_arrived(HoldPhase::TakeOffSettle, &target, since, now, telemetry) {
                info!("Takeoff settled at {:.1}m", self.params.take_off_altitude);
                self.advance(now);
            }
            return;
        }
        if !self.ctx.retry.should_attempt(MissionState::TakeOff, now) {
            return;
        }
        let alt = self.params.take_off_altitude;
        info!("Attempting takeoff to {alt:.1}m");
        let channel = Arc::clone(&self.channel);
        let res = self.stream_while(channel.request_takeoff(alt)).await;
        if self.record(now, "Takeoff", &res).is_accepted() {
            warn!("Takeoff initiated!");
            info!("Ascending to {alt:.1}m, holding until settled...");
            self.ctx.held_since = Some(now);
        }
    }

    fn go_to_point(&mut self, telemetry: &VehicleState, now: Instant) {
        let Some(since) = self.ctx.held_since else {
            self.select_waypoint(0, now);
            return;
        };
        let idx = self.ctx.waypoint;
        let target = self.ctx.streamer.target();
        if self.arrival.has_arrived(HoldPhase::Waypoint(idx), &target, since, now, telemetry) {
            info!("Reached waypoint {}/{}", idx + 1, self.ctx.plan.len());
            self.select_waypoint(idx + 1, now);
        }
    }

    async fn land(&mut self, now: Instant) {
        if !self.ctx.retry.should_attempt(MissionState::Land, now) {
            return;
        }
        let site = self.params.landing_site;
        warn!("Initiating landing sequence");
        let channel = Arc::clone(&self.channel);
        let res = self.stream_while(channel.request_land(site.lat, site.lon, site.alt)).await;
        if self.record(now, "Landing", &res).is_accepted() {
            warn!("Landing command accepted");
            info!("Descending... (check actual altitude)");
            self.advance(now);
        }
    }

    /// Makes waypoint `idx` the active target, or leaves `GO_TO_POINT` past the last one.
    fn select_waypoint(&mut self, idx: usize, now: Instant) {
        match self.ctx.plan.get(idx) {
            Some(wp) => {
                info!("Navigating to waypoint {}/{} {wp}", idx + 1, self.ctx.plan.len());
                self.ctx.waypoint = idx;
                self.ctx.streamer.set_target(wp);
                self.ctx.held_since = Some(now);
            }
            None => self.advance(now),
        }
    }

    /// Awaits a command reply to completion, publishing the setpoint every tick period
    /// until it arrives.
    async fn stream_while<F>(&mut self, request: F) -> Result<CommandResponse, ChannelError>
    where F: Future<Output = Result<CommandResponse, ChannelError>> {
        let period = self.params.tick_period;
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(request);
        loop {
            tokio::select! {
                res = &mut request => return res,
                _ = interval.tick() => self.stream_only(),
            }
        }
    }

    /// Moves to the successor state; the only way `state` ever changes.
    fn advance(&mut self, now: Instant) {
        let Some(next) = self.ctx.state.next() else { return };
        info!("State transition: {} -> {next}", self.ctx.state);
        self.ctx.state = next;
        self.ctx.retry.enter(next, now);
        self.ctx.held_since = None;
        self.ctx.waypoint = 0;
        if next == MissionState::GoToPoint {
            if self.ctx.plan.is_empty() {
                warn!("Waypoint plan is empty, landing right away");
            }
            warn!("Starting waypoint navigation");
            self.select_waypoint(0, now);
        }
    }

    /// Books an attempt against the retry policy and logs its outcome.
    fn record(
        &mut self,
        now: Instant,
        what: &str,
        res: &Result<CommandResponse, ChannelError>,
    ) -> CommandOutcome {
        self.ctx.retry.record_attempt(now);
        let outcome = CommandOutcome::from(res);
        match res {
            Ok(CommandResponse { accepted: true }) => {}
            Ok(_) => error!("{what} command rejected"),
            Err(e) => error!("{what} service call failed: {e}"),
        }
        let attempts = self.ctx.retry.attempts();
        let threshold = self.params.attempt_warn_threshold;
        if !outcome.is_accepted() && threshold > 0 && attempts % threshold == 0 {
            warn!(
                "{attempts} attempts in {} without success after {}s!",
                self.ctx.state,
                self.ctx.retry.time_in_state(now).as_secs()
            );
        }
        outcome
    }

    fn print_status(&mut self, now: Instant) {
        if self.ctx.status_throttle.ready(now) {
            log!("{}", self.status_line(now));
        }
    }

    /// One-line progress summary logged once per second.
    pub(super) fn status_line(&self, now: Instant) -> String {
        let status = self.status(now);
        let streamer = self.ctx.streamer();
        let waypoint = status
            .waypoint
            .map(|i| format!(", waypoint {}/{}", i + 1, self.ctx.plan.len()))
            .unwrap_or_default();
        format!(
            "Current state: {} ({} attempts, {:.1}s in state{waypoint}, target {}, {} setpoints sent, {} target updates)",
            status.state,
            status.attempts,
            status.time_in_state.as_secs_f32(),
            streamer.target(),
            streamer.published(),
            streamer.target_updates()
        )
    }
}

fn display_mode(telemetry: &VehicleState) -> &str {
    if telemetry.mode().is_empty() { "<unknown>" } else { telemetry.mode() }
}
