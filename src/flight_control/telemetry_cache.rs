use super::VehicleState;
use tokio::sync::watch;

/// Single shared copy of the latest [`VehicleState`].
///
/// The telemetry monitor is the only writer; the mission loop reads synchronously. Each
/// update swaps the whole snapshot, readers never observe a half-written state.
#[derive(Debug)]
pub struct TelemetryCache {
    snapshot: watch::Sender<VehicleState>,
}

impl TelemetryCache {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(VehicleState::disconnected());
        Self { snapshot }
    }

    /// Replaces the cached snapshot unconditionally.
    pub fn update(&self, state: VehicleState) { self.snapshot.send_replace(state); }

    /// Returns the latest snapshot, or a disconnected default before the first update.
    pub fn read(&self) -> VehicleState { self.snapshot.borrow().clone() }

    /// Resolves once a snapshot reporting `connected == true` is cached.
    pub async fn connected(&self) {
        let mut rx = self.snapshot.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(VehicleState::connected).await;
    }
}

impl Default for TelemetryCache {
    fn default() -> Self { Self::new() }
}
