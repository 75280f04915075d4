use super::{ChannelError, CommandChannel, CommandResponse, Setpoint, TelemetryCache, VehicleState};
use crate::http_handler::{HTTPError, http_request::request_common::RequestError};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    ModeChange(String),
    Arm(bool),
    TakeOff(f64),
    Land(f64, f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CallKind {
    ModeChange,
    Arm,
    TakeOff,
    Land,
}

impl Call {
    fn kind(&self) -> CallKind {
        match self {
            Call::ModeChange(_) => CallKind::ModeChange,
            Call::Arm(_) => CallKind::Arm,
            Call::TakeOff(_) => CallKind::TakeOff,
            Call::Land(..) => CallKind::Land,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Reply {
    Accept,
    Reject,
    Fail,
}

/// Recording [`CommandChannel`] with scripted replies. Unscripted calls are accepted.
///
/// With an attached [`TelemetryCache`] it also plays autopilot: accepted mode changes and
/// arm requests are reflected in the cached state.
#[derive(Default)]
pub(crate) struct MockCommandChannel {
    calls: Mutex<Vec<(Instant, Call)>>,
    setpoints: Mutex<Vec<Setpoint>>,
    script: Mutex<HashMap<CallKind, VecDeque<Reply>>>,
    autopilot: Option<Arc<TelemetryCache>>,
    latency: Option<Duration>,
}

impl MockCommandChannel {
    pub(crate) fn new() -> Self { Self::default() }

    pub(crate) fn with_autopilot(cache: Arc<TelemetryCache>) -> Self {
        Self { autopilot: Some(cache), ..Self::default() }
    }

    /// Delays every command reply by `latency`.
    pub(crate) fn with_latency(self, latency: Duration) -> Self {
        Self { latency: Some(latency), ..self }
    }

    pub(crate) fn script(&self, kind: CallKind, replies: &[Reply]) {
        self.script.lock().unwrap().entry(kind).or_default().extend(replies.iter().copied());
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().iter().map(|(_, c)| c.clone()).collect()
    }

    pub(crate) fn timed_calls(&self) -> Vec<(Instant, Call)> { self.calls.lock().unwrap().clone() }

    pub(crate) fn setpoints(&self) -> Vec<Setpoint> { self.setpoints.lock().unwrap().clone() }

    async fn answer(&self, call: Call) -> Result<CommandResponse, ChannelError> {
        let kind = call.kind();
        self.calls.lock().unwrap().push((Instant::now(), call.clone()));
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let reply =
            self.script.lock().unwrap().get_mut(&kind).and_then(VecDeque::pop_front).unwrap_or(Reply::Accept);
        match reply {
            Reply::Accept => {
                self.apply(&call);
                Ok(CommandResponse::accepted())
            }
            Reply::Reject => Ok(CommandResponse::rejected()),
            Reply::Fail => Err(ChannelError::from(HTTPError::from(RequestError::NoConnection))),
        }
    }

    fn apply(&self, call: &Call) {
        let Some(cache) = &self.autopilot else { return };
        let cur = cache.read();
        match call {
            Call::ModeChange(mode) => cache.update(VehicleState::new(cur.connected(), cur.armed(), mode.clone())),
            Call::Arm(value) => cache.update(VehicleState::new(cur.connected(), *value, cur.mode())),
            Call::TakeOff(_) | Call::Land(..) => {}
        }
    }
}

#[async_trait]
impl CommandChannel for MockCommandChannel {
    async fn request_mode_change(&self, mode: &str) -> Result<CommandResponse, ChannelError> {
        self.answer(Call::ModeChange(mode.to_string())).await
    }

    async fn request_arm(&self, value: bool) -> Result<CommandResponse, ChannelError> {
        self.answer(Call::Arm(value)).await
    }

    async fn request_takeoff(&self, altitude: f64) -> Result<CommandResponse, ChannelError> {
        self.answer(Call::TakeOff(altitude)).await
    }

    async fn request_land(&self, lat: f64, lon: f64, altitude: f64) -> Result<CommandResponse, ChannelError> {
        self.answer(Call::Land(lat, lon, altitude)).await
    }

    fn publish_setpoint(&self, setpoint: Setpoint) { self.setpoints.lock().unwrap().push(setpoint); }
}
