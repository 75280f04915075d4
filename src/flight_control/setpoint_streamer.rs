use super::{CommandChannel, Setpoint, TargetPose};
use crate::event;
use crate::mission_config::AxisConvention;

/// Keeps the single active [`TargetPose`] and publishes it once per loop tick.
///
/// Publishing is unconditional: the autopilot leaves external-control mode when the stream
/// stalls, so the same target is re-sent every tick even if nothing changed.
#[derive(Debug, Clone)]
pub struct SetpointStreamer {
    target: TargetPose,
    convention: AxisConvention,
    frame: String,
    target_updates: usize,
    published: u64,
}

impl SetpointStreamer {
    pub fn new(initial: TargetPose, convention: AxisConvention, frame: impl Into<String>) -> Self {
        Self { target: initial, convention, frame: frame.into(), target_updates: 0, published: 0 }
    }

    /// Overwrites the active target.
    pub fn set_target(&mut self, target: TargetPose) {
        self.target = target;
        self.target_updates += 1;
    }

    pub fn target(&self) -> TargetPose { self.target }
    /// Number of `set_target` calls since construction.
    pub fn target_updates(&self) -> usize { self.target_updates }
    pub fn published(&self) -> u64 { self.published }

    pub fn setpoint(&self) -> Setpoint {
        let (x, y, z) = self.target.to_axes(self.convention);
        Setpoint { x, y, z, frame: self.frame.clone() }
    }

    /// Publishes the current target.
    pub fn tick(&mut self, channel: &dyn CommandChannel) {
        let sp = self.setpoint();
        event!("Publishing target position: [{:.2}, {:.2}, {:.2}] in {}", sp.x, sp.y, sp.z, sp.frame);
        channel.publish_setpoint(sp);
        self.published += 1;
    }
}
