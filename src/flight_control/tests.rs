use super::mock_channel::MockCommandChannel;
use super::*;
use crate::http_handler::{HTTPError, http_request::request_common::RequestError};
use crate::mission_config::AxisConvention;

#[test]
fn enu_setpoint_keeps_axes() {
    let streamer = SetpointStreamer::new(TargetPose::new(1.0, 2.0, 3.0), AxisConvention::Enu, "map");
    assert_eq!(streamer.setpoint(), Setpoint { x: 1.0, y: 2.0, z: 3.0, frame: "map".to_string() });
}

#[test]
fn ned_setpoint_swaps_horizontal_and_flips_up() {
    let streamer = SetpointStreamer::new(TargetPose::new(1.0, 2.0, 3.0), AxisConvention::Ned, "map");
    let sp = streamer.setpoint();
    assert_eq!((sp.x, sp.y, sp.z), (2.0, 1.0, -3.0));
}

#[test]
fn every_tick_publishes_current_target() {
    let channel = MockCommandChannel::new();
    let mut streamer = SetpointStreamer::new(TargetPose::new(0.0, 0.0, 1.0), AxisConvention::Enu, "map");
    streamer.tick(&channel);
    streamer.set_target(TargetPose::new(1.0, 0.0, 1.0));
    streamer.tick(&channel);
    streamer.tick(&channel);
    let published: Vec<_> = channel.setpoints().iter().map(|s| (s.x, s.y, s.z)).collect();
    assert_eq!(published, vec![(0.0, 0.0, 1.0), (1.0, 0.0, 1.0), (1.0, 0.0, 1.0)]);
    assert_eq!(streamer.published(), 3);
    assert_eq!(streamer.target_updates(), 1);
}

#[test]
fn repeated_set_target_streams_identical_messages() {
    let channel = MockCommandChannel::new();
    let mut streamer = SetpointStreamer::new(TargetPose::new(0.0, 0.0, 1.0), AxisConvention::Enu, "map");
    streamer.set_target(TargetPose::new(1.0, 1.0, 1.0));
    streamer.tick(&channel);
    streamer.set_target(TargetPose::new(1.0, 1.0, 1.0));
    streamer.tick(&channel);
    streamer.tick(&channel);
    let setpoints = channel.setpoints();
    assert_eq!(setpoints.len(), 3);
    assert!(setpoints.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn outcome_classification() {
    let ok: Result<CommandResponse, ChannelError> = Ok(CommandResponse::accepted());
    let rejected: Result<CommandResponse, ChannelError> = Ok(CommandResponse::rejected());
    let failed: Result<CommandResponse, ChannelError> = Err(ChannelError::from(HTTPError::from(RequestError::Timeout)));
    assert_eq!(CommandOutcome::from(&ok), CommandOutcome::Accepted);
    assert_eq!(CommandOutcome::from(&rejected), CommandOutcome::Rejected);
    assert_eq!(CommandOutcome::from(&failed), CommandOutcome::TransportFailure);
    assert!(!CommandOutcome::TransportFailure.is_accepted());
}
