use crate::http_handler::HTTPError;
use async_trait::async_trait;
use strum_macros::Display;

/// A single outbound local position setpoint, already in the autopilot's axis convention.
#[derive(Debug, Clone, PartialEq)]
pub struct Setpoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub frame: String,
}

/// Autopilot answer to a command request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResponse {
    pub accepted: bool,
}

#[cfg(test)]
impl CommandResponse {
    pub fn accepted() -> Self { Self { accepted: true } }
    pub fn rejected() -> Self { Self { accepted: false } }
}

#[derive(Debug, Display)]
pub enum ChannelError {
    Transport(HTTPError),
}

impl std::error::Error for ChannelError {}

impl From<HTTPError> for ChannelError {
    fn from(value: HTTPError) -> Self { ChannelError::Transport(value) }
}

/// How a command attempt ended, as seen by the mission sequencer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted,
    Rejected,
    TransportFailure,
}

impl CommandOutcome {
    pub fn is_accepted(self) -> bool { self == CommandOutcome::Accepted }
}

impl From<&Result<CommandResponse, ChannelError>> for CommandOutcome {
    fn from(value: &Result<CommandResponse, ChannelError>) -> Self {
        match value {
            Ok(CommandResponse { accepted: true }) => CommandOutcome::Accepted,
            Ok(CommandResponse { accepted: false }) => CommandOutcome::Rejected,
            Err(_) => CommandOutcome::TransportFailure,
        }
    }
}

/// Request/response and streaming interface towards the autopilot.
#[async_trait]
pub trait CommandChannel: Send + Sync {
    async fn request_mode_change(&self, mode: &str) -> Result<CommandResponse, ChannelError>;
    async fn request_arm(&self, value: bool) -> Result<CommandResponse, ChannelError>;
    async fn request_takeoff(&self, altitude: f64) -> Result<CommandResponse, ChannelError>;
    async fn request_land(&self, lat: f64, lon: f64, altitude: f64)
    -> Result<CommandResponse, ChannelError>;
    /// Fire-and-forget; no acknowledgement is awaited.
    fn publish_setpoint(&self, setpoint: Setpoint);
}
