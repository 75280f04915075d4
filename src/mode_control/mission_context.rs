use super::{MissionState, RetryPolicy, WaypointPlan};
use crate::flight_control::SetpointStreamer;
use crate::mission_config::{LandingSite, MissionConfig};
use crate::util::Throttle;
use std::time::Duration;
use tokio::time::Instant;

/// Mission parameters the sequencer needs while ticking.
#[derive(Debug, Clone)]
pub struct MissionParams {
    pub control_mode: String,
    pub take_off_altitude: f64,
    pub landing_site: LandingSite,
    pub attempt_warn_threshold: u32,
    pub tick_period: Duration,
    pub priming_setpoints: usize,
}

impl From<&MissionConfig> for MissionParams {
    fn from(conf: &MissionConfig) -> Self {
        Self {
            control_mode: conf.control_mode.clone(),
            take_off_altitude: conf.take_off_altitude,
            landing_site: conf.landing_site,
            attempt_warn_threshold: conf.attempt_warn_threshold,
            tick_period: conf.tick_period(),
            priming_setpoints: conf.priming_setpoints,
        }
    }
}

/// Everything the mission loop owns and mutates. Nothing outside the loop holds a
/// reference into it.
#[derive(Debug)]
pub struct MissionContext {
    pub(super) state: MissionState,
    pub(super) streamer: SetpointStreamer,
    pub(super) retry: RetryPolicy,
    pub(super) plan: WaypointPlan,
    /// Index of the waypoint being held in `GO_TO_POINT`.
    pub(super) waypoint: usize,
    /// Start of the current settle or dwell hold.
    pub(super) held_since: Option<Instant>,
    pub(super) status_throttle: Throttle,
    pub(super) link_throttle: Throttle,
}

/// Observable progress of the mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionStatus {
    pub state: MissionState,
    pub attempts: u32,
    pub time_in_state: Duration,
    pub waypoint: Option<usize>,
}

impl MissionContext {
    const STATUS_PERIOD: Duration = Duration::from_secs(1);
    const LINK_WARN_PERIOD: Duration = Duration::from_millis(2500);

    pub fn new(conf: &MissionConfig, now: Instant) -> Self {
        Self {
            state: MissionState::ReadyToFly,
            streamer: SetpointStreamer::new(
                conf.initial_target,
                conf.axis_convention,
                conf.setpoint_frame.clone(),
            ),
            retry: RetryPolicy::new(conf.cooldowns, MissionState::ReadyToFly, now),
            plan: conf.plan.clone(),
            waypoint: 0,
            held_since: None,
            status_throttle: Throttle::new(Self::STATUS_PERIOD),
            link_throttle: Throttle::new(Self::LINK_WARN_PERIOD),
        }
    }

    pub fn state(&self) -> MissionState { self.state }
    pub fn streamer(&self) -> &SetpointStreamer { &self.streamer }

    pub fn status(&self, now: Instant) -> MissionStatus {
        MissionStatus {
            state: self.state,
            attempts: self.retry.attempts(),
            time_in_state: self.retry.time_in_state(now),
            waypoint: (self.state == MissionState::GoToPoint).then_some(self.waypoint),
        }
    }
}
