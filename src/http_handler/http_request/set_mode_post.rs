use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use super::set_mode::SetModeResponse;

/// Request type for the /set_mode endpoint.
#[derive(serde::Serialize, Debug)]
pub(crate) struct SetModeRequest {
    /// The autopilot specific mode name, e.g. `"GUIDED"`.
    pub(crate) custom_mode: String,
}

impl JSONBodyHTTPRequestType for SetModeRequest {
    type Body = SetModeRequest;
    fn body(&self) -> &Self::Body { self }
}

impl HTTPRequestType for SetModeRequest {
    type Response = SetModeResponse;
    fn endpoint(&self) -> &'static str { "/set_mode" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
