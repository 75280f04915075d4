use crate::flight_control::{BridgeCommandChannel, CommandChannel, TelemetryCache, TelemetryMonitor};
use crate::http_handler::{http_client::HTTPClient, http_request::request_common::RequestError};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Struct holding the long-lived components of the application, providing access
/// to the telemetry cache and the command channel towards the bridge.
#[derive(Clone)]
pub struct Keychain {
    /// The latest vehicle state, written by the telemetry monitor.
    telemetry: Arc<TelemetryCache>,
    /// The telemetry source feeding `telemetry`.
    monitor: Arc<TelemetryMonitor>,
    /// The command channel towards the autopilot.
    channel: Arc<dyn CommandChannel>,
}

impl Keychain {
    /// Creates all components for the bridge at `url`. Background tasks stop on `cancel`.
    ///
    /// # Arguments
    /// - `url`: The base URL of the autopilot bridge.
    /// - `cancel`: The process-wide shutdown token.
    pub fn new(url: &str, cancel: &CancellationToken) -> Result<Self, RequestError> {
        let client = Arc::new(HTTPClient::new(url)?);
        let telemetry = Arc::new(TelemetryCache::new());
        let monitor = Arc::new(TelemetryMonitor::new(Arc::clone(&client), Arc::clone(&telemetry)));
        let channel: Arc<dyn CommandChannel> =
            Arc::new(BridgeCommandChannel::start(Arc::clone(&client), cancel.clone()));
        Ok(Self { telemetry, monitor, channel })
    }

    /// Spawns the telemetry monitor.
    pub fn start_monitor(&self, cancel: CancellationToken) {
        let monitor = Arc::clone(&self.monitor);
        tokio::spawn(async move {
            monitor.run(cancel).await;
        });
    }

    /// Provides a cloned reference to the telemetry cache.
    pub fn telemetry(&self) -> Arc<TelemetryCache> { Arc::clone(&self.telemetry) }

    /// Provides a cloned reference to the command channel.
    pub fn channel(&self) -> Arc<dyn CommandChannel> { Arc::clone(&self.channel) }
}
