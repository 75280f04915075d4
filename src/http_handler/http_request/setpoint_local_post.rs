use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::setpoint_ack::SetpointAckResponse;

/// Request type for the /setpoint_position/local endpoint.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub(crate) struct SetpointLocalRequest {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) z: f64,
    pub(crate) frame_id: String,
}

impl JSONBodyHTTPRequestType for SetpointLocalRequest {
    type Body = SetpointLocalRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for SetpointLocalRequest {
    type Response = SetpointAckResponse;
    fn endpoint(&self) -> &'static str { "/setpoint_position/local" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
