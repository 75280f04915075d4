//! Vehicle-facing side of the mission: cached telemetry, the setpoint stream and the
//! command channel towards the autopilot.

mod bridge_channel;
mod command_channel;
mod setpoint_streamer;
mod target_pose;
mod telemetry_cache;
mod telemetry_monitor;
mod vehicle_state;

#[cfg(test)]
pub(crate) mod mock_channel;
#[cfg(test)]
mod tests;

pub use bridge_channel::BridgeCommandChannel;
pub use command_channel::{
    ChannelError, CommandChannel, CommandOutcome, CommandResponse, Setpoint,
};
pub use setpoint_streamer::SetpointStreamer;
pub use target_pose::TargetPose;
pub use telemetry_cache::TelemetryCache;
pub use telemetry_monitor::TelemetryMonitor;
pub use vehicle_state::VehicleState;
