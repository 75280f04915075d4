use crate::http_handler::http_response::response_common::BridgeAckResponseType;

/// Response type for the /set_mode endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct SetModeResponse {
    /// Whether the autopilot accepted the mode change.
    mode_sent: bool,
}

impl BridgeAckResponseType for SetModeResponse {
    fn accepted(&self) -> bool { self.mode_sent }
}
