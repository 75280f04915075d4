use super::command_result::CommandResultResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};

/// Request type for the /cmd/arming endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct ArmingRequest {
    /// `true` arms the vehicle, `false` disarms it.
    pub(crate) value: bool,
}

impl JSONBodyHTTPRequestType for ArmingRequest {
    type Body = ArmingRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for ArmingRequest {
    type Response = CommandResultResponse;
    fn endpoint(&self) -> &'static str { "/cmd/arming" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
