use super::command_channel::{ChannelError, CommandChannel, CommandResponse, Setpoint};
use crate::http_handler::{
    HTTPError,
    http_client::HTTPClient,
    http_request::{
        arming_post::ArmingRequest,
        command_tol_post::CommandTOLRequest,
        request_common::JSONBodyHTTPRequestType,
        set_mode_post::SetModeRequest,
        setpoint_local_post::SetpointLocalRequest,
    },
    http_response::response_common::BridgeAckResponseType,
};
use crate::util::Throttle;
use crate::{event, warn};
use async_trait::async_trait;
use std::{future::Future, sync::Arc, time::Duration};
use tokio::sync::watch;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// [`CommandChannel`] backed by the HTTP autopilot bridge.
///
/// Setpoints go into a single-slot mailbox drained by a dedicated task: a slow bridge never
/// stalls the mission loop, and the task always delivers the newest setpoint, skipping any
/// it could not keep up with.
pub struct BridgeCommandChannel {
    client: Arc<HTTPClient>,
    latest_setpoint: watch::Sender<Option<Setpoint>>,
}

impl BridgeCommandChannel {
    const WARN_PERIOD: Duration = Duration::from_secs(1);

    /// Creates the channel and spawns the setpoint forwarder, which stops on `cancel`.
    pub(crate) fn start(client: Arc<HTTPClient>, cancel: CancellationToken) -> Self {
        let (latest_setpoint, rx) = watch::channel(None);
        let client_clone = Arc::clone(&client);
        tokio::spawn(async move {
            forward_setpoints(rx, cancel, move |sp: Setpoint| {
                let client = Arc::clone(&client_clone);
                async move { SetpointLocalRequest::from(sp).send_request(&client).await }
            })
            .await;
        });
        Self { client, latest_setpoint }
    }
}

/// Delivers the most recent setpoint whenever it changes. Setpoints published while a
/// delivery is in flight collapse into the newest one.
pub(crate) async fn forward_setpoints<F, Fut>(
    mut rx: watch::Receiver<Option<Setpoint>>,
    cancel: CancellationToken,
    mut deliver: F,
) where
    F: FnMut(Setpoint) -> Fut,
    Fut: Future<Output = Result<(), HTTPError>>,
{
    let mut err_throttle = Throttle::new(BridgeCommandChannel::WARN_PERIOD);
    loop {
        tokio::select! {
            () = cancel.cancelled() => return,
            changed = rx.changed() => {
                if changed.is_err() {
                    return;
                }
            }
        }
        let Some(sp) = rx.borrow_and_update().clone() else { continue };
        if let Err(e) = deliver(sp).await {
            if err_throttle.ready(Instant::now()) {
                warn!("Setpoint delivery failed: {e}");
            }
        }
    }
}

impl From<Setpoint> for SetpointLocalRequest {
    fn from(value: Setpoint) -> Self {
        Self { x: value.x, y: value.y, z: value.z, frame_id: value.frame }
    }
}

#[async_trait]
impl CommandChannel for BridgeCommandChannel {
    async fn request_mode_change(&self, mode: &str) -> Result<CommandResponse, ChannelError> {
        let resp = SetModeRequest { custom_mode: mode.to_string() }.send_request(&self.client).await?;
        Ok(CommandResponse { accepted: resp.accepted() })
    }

    async fn request_arm(&self, value: bool) -> Result<CommandResponse, ChannelError> {
        let resp = ArmingRequest { value }.send_request(&self.client).await?;
        if let Some(code) = resp.result() {
            event!("Arming result code {code}");
        }
        Ok(CommandResponse { accepted: resp.accepted() })
    }

    async fn request_takeoff(&self, altitude: f64) -> Result<CommandResponse, ChannelError> {
        let req = CommandTOLRequest::take_off(altitude);
        let resp = req.send_request(&self.client).await?;
        if let Some(code) = resp.result() {
            event!("{} result code {code}", req.kind());
        }
        Ok(CommandResponse { accepted: resp.accepted() })
    }

    async fn request_land(
        &self,
        lat: f64,
        lon: f64,
        altitude: f64,
    ) -> Result<CommandResponse, ChannelError> {
        let req = CommandTOLRequest::land(lat, lon, altitude);
        let resp = req.send_request(&self.client).await?;
        if let Some(code) = resp.result() {
            event!("{} result code {code}", req.kind());
        }
        Ok(CommandResponse { accepted: resp.accepted() })
    }

    fn publish_setpoint(&self, setpoint: Setpoint) { self.latest_setpoint.send_replace(Some(setpoint)); }
}
