/// Last-known autopilot state as reported by the telemetry stream.
///
/// Snapshots are always replaced wholesale, so all three fields come from the same report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VehicleState {
    connected: bool,
    armed: bool,
    mode: String,
}

impl VehicleState {
    pub fn new(connected: bool, armed: bool, mode: impl Into<String>) -> Self {
        Self { connected, armed, mode: mode.into() }
    }

    /// The value reported before any telemetry arrived or after the link dropped.
    pub fn disconnected() -> Self { Self::default() }

    pub fn connected(&self) -> bool { self.connected }
    pub fn armed(&self) -> bool { self.armed }
    pub fn mode(&self) -> &str { self.mode.as_str() }
}
