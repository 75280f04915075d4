use crate::http_handler::http_response::response_common::BridgeAckResponseType;

/// Response type shared by /cmd/arming, /cmd/takeoff and /cmd/land.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct CommandResultResponse {
    success: bool,
    /// Raw MAV_RESULT code, if the bridge forwards it.
    #[serde(default)]
    result: Option<u8>,
}

impl BridgeAckResponseType for CommandResultResponse {
    fn accepted(&self) -> bool { self.success }
}

impl CommandResultResponse {
    pub(crate) fn result(&self) -> Option<u8> { self.result }
}
