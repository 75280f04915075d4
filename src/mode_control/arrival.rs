use crate::flight_control::{TargetPose, VehicleState};
use std::time::Duration;
use strum_macros::Display;
use tokio::time::Instant;

/// What the mission is currently holding for.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum HoldPhase {
    TakeOffSettle,
    Waypoint(usize),
}

/// Decides when the vehicle counts as having reached the active target.
///
/// The sequencer only asks; swapping the fixed timer for position feedback does not touch
/// the state machine.
pub trait ArrivalPredicate: Send + Sync {
    fn has_arrived(
        &self,
        phase: HoldPhase,
        target: &TargetPose,
        held_since: Instant,
        now: Instant,
        telemetry: &VehicleState,
    ) -> bool;
}

/// Open-loop arrival: the target counts as reached after a fixed hold time.
#[derive(Debug, Clone, Copy)]
pub struct FixedDwell {
    pub settle: Duration,
    pub dwell: Duration,
}

impl ArrivalPredicate for FixedDwell {
    fn has_arrived(
        &self,
        phase: HoldPhase,
        _target: &TargetPose,
        held_since: Instant,
        now: Instant,
        _telemetry: &VehicleState,
    ) -> bool {
        let hold = match phase {
            HoldPhase::TakeOffSettle => self.settle,
            HoldPhase::Waypoint(_) => self.dwell,
        };
        now.saturating_duration_since(held_since) >= hold
    }
}
