use super::{TelemetryCache, VehicleState};
use crate::http_handler::{
    http_client::HTTPClient, http_request::state_stream_get::StateStreamRequest,
    http_response::vehicle_state::VehicleStateEvent,
};
use crate::util::Throttle;
use crate::{event, info, warn};
use futures::StreamExt;
use reqwest_eventsource::Event;
use std::{sync::Arc, time::Duration};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Telemetry source: subscribes to the bridge's state stream and mirrors every snapshot
/// into the [`TelemetryCache`].
pub struct TelemetryMonitor {
    client: Arc<HTTPClient>,
    cache: Arc<TelemetryCache>,
}

impl TelemetryMonitor {
    const ERR_LOG_PERIOD: Duration = Duration::from_millis(2500);

    pub(crate) fn new(client: Arc<HTTPClient>, cache: Arc<TelemetryCache>) -> Self {
        Self { client, cache }
    }

    /// Runs until `cancel` fires. Stream errors mark the link as disconnected; the event
    /// source reconnects on its own.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut source = StateStreamRequest {}.subscribe(&self.client);
        let mut err_throttle = Throttle::new(Self::ERR_LOG_PERIOD);
        loop {
            let next = tokio::select! {
                () = cancel.cancelled() => break,
                next = source.next() => next,
            };
            match next {
                Some(Ok(Event::Open)) => info!("Telemetry stream opened at {}.", self.client.url()),
                Some(Ok(Event::Message(msg))) => match VehicleStateEvent::parse(&msg.data) {
                    Ok(ev) => {
                        let state = VehicleState::from(ev);
                        event!("Telemetry: {state:?}");
                        self.cache.update(state);
                    }
                    Err(e) => warn!("Dropping malformed telemetry event: {e}"),
                },
                Some(Err(e)) => {
                    self.cache.update(VehicleState::disconnected());
                    if err_throttle.ready(Instant::now()) {
                        warn!("Telemetry stream error: {e}");
                    }
                }
                None => {
                    self.cache.update(VehicleState::disconnected());
                    warn!("Telemetry stream ended, resubscribing!");
                    source = StateStreamRequest {}.subscribe(&self.client);
                }
            }
        }
        source.close();
    }
}
