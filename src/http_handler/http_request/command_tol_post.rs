use super::command_result::CommandResultResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, JSONBodyHTTPRequestType};
use strum_macros::Display;

/// Takeoff and landing share one request body on the bridge.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TOLKind {
    #[strum(serialize = "takeoff")]
    TakeOff,
    #[strum(serialize = "land")]
    Land,
}

#[derive(serde::Serialize, Debug)]
pub(crate) struct CommandTOLBody {
    pub(crate) altitude: f64,
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

/// Request type for the /cmd/takeoff and /cmd/land endpoints.
#[derive(Debug)]
pub(crate) struct CommandTOLRequest {
    kind: TOLKind,
    body: CommandTOLBody,
}

impl CommandTOLRequest {
    pub(crate) fn take_off(altitude: f64) -> Self {
        Self { kind: TOLKind::TakeOff, body: CommandTOLBody { altitude, latitude: 0.0, longitude: 0.0 } }
    }

    pub(crate) fn land(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self { kind: TOLKind::Land, body: CommandTOLBody { altitude, latitude, longitude } }
    }

    pub(crate) fn kind(&self) -> TOLKind { self.kind }
}

impl JSONBodyHTTPRequestType for CommandTOLRequest {
    type Body = CommandTOLBody;
    fn body(&self) -> &Self::Body { &self.body }
}

impl HTTPRequestType for CommandTOLRequest {
    type Response = CommandResultResponse;
    fn endpoint(&self) -> &'static str {
        match self.kind {
            TOLKind::TakeOff => "/cmd/takeoff",
            TOLKind::Land => "/cmd/land",
        }
    }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
