use crate::mission_config::AxisConvention;

/// Active position target in the local frame, authored as (east, north, up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    x: f64,
    y: f64,
    z: f64,
}

impl TargetPose {
    pub const fn new(east: f64, north: f64, up: f64) -> Self { Self { x: east, y: north, z: up } }

    pub fn is_finite(&self) -> bool { self.x.is_finite() && self.y.is_finite() && self.z.is_finite() }

    /// Lays the pose onto the autopilot's `x, y, z` axes.
    pub fn to_axes(self, convention: AxisConvention) -> (f64, f64, f64) {
        match convention {
            AxisConvention::Enu => (self.x, self.y, self.z),
            AxisConvention::Ned => (self.y, self.x, -self.z),
        }
    }
}

impl std::fmt::Display for TargetPose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}
