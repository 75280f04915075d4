//! The mission state machine: states, retry gating, arrival decisions and the sequencer
//! that ties them to the setpoint stream and the command channel.

mod arrival;
mod mission_context;
mod mission_state;
mod preflight;
mod retry_policy;
mod sequencer;
mod signal;
mod waypoint_plan;


pub use arrival::{ArrivalPredicate, FixedDwell, HoldPhase};
pub use mission_context::{MissionContext, MissionParams, MissionStatus};
pub use mission_state::MissionState;
pub use retry_policy::RetryPolicy;
pub use sequencer::MissionSequencer;
pub use signal::{OpExitSignal, TickSignal};
pub use waypoint_plan::{PlanError, WaypointPlan};
