use crate::flight_control::VehicleState;

/// Payload of a single /state/stream event.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct VehicleStateEvent {
    connected: bool,
    armed: bool,
    mode: String,
}

impl VehicleStateEvent {
    pub(crate) fn parse(data: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(data) }
}

impl From<VehicleStateEvent> for VehicleState {
    fn from(value: VehicleStateEvent) -> Self {
        VehicleState::new(value.connected, value.armed, value.mode)
    }
}
