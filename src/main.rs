#![allow(clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod console_communication;
mod flight_control;
mod http_handler;
mod keychain;
mod logger;
mod mission_config;
mod mode_control;
mod util;

use crate::console_communication::LaunchGate;
use crate::keychain::Keychain;
use crate::mission_config::MissionConfig;
use crate::mode_control::{FixedDwell, MissionSequencer, OpExitSignal};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let conf = MissionConfig::from_env().unwrap_or_else(|e| fatal!("Invalid configuration: {e}"));
    info!(
        "Bridge at {}, {} setpoints in frame '{}' at {}Hz, control mode {}",
        conf.bridge_url,
        conf.axis_convention,
        conf.setpoint_frame,
        conf.setpoint_rate_hz,
        conf.control_mode
    );
    for (i, wp) in conf.plan.iter().enumerate() {
        info!("Waypoint {}/{}: {wp}", i + 1, conf.plan.len());
    }

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_clone.cancel();
        }
    });

    let keychain = Keychain::new(&conf.bridge_url, &cancel)
        .unwrap_or_else(|e| fatal!("Could not create bridge client: {e}"));
    keychain.start_monitor(cancel.clone());

    let arrival = FixedDwell { settle: conf.take_off_settle, dwell: conf.waypoint_dwell };
    let mut sequencer = MissionSequencer::new(
        &conf,
        keychain.channel(),
        keychain.telemetry(),
        Box::new(arrival),
        Instant::now(),
    );

    let exit = fly(&mut sequencer, &cancel).await;
    if exit == OpExitSignal::Cancelled {
        warn!("Mission aborted by operator in {}", sequencer.state());
    }
    cancel.cancel();
    info!("Shutting down");
}

async fn fly(sequencer: &mut MissionSequencer, cancel: &CancellationToken) -> OpExitSignal {
    if sequencer.wait_for_connection(cancel).await == OpExitSignal::Cancelled {
        return OpExitSignal::Cancelled;
    }
    if sequencer.prime_setpoints(cancel).await == OpExitSignal::Cancelled {
        return OpExitSignal::Cancelled;
    }
    if sequencer.hold_for_launch(LaunchGate::stdin().wait(), cancel).await == OpExitSignal::Cancelled {
        return OpExitSignal::Cancelled;
    }
    sequencer.run(cancel).await
}
