use crate::flight_control::TargetPose;
use strum_macros::Display;

#[derive(Debug, Display)]
pub enum PlanError {
    NonFiniteWaypoint(usize),
}

impl std::error::Error for PlanError {}

/// Ordered, immutable list of waypoints visited during `GO_TO_POINT`.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointPlan {
    waypoints: Vec<TargetPose>,
}

impl WaypointPlan {
    pub fn new(waypoints: Vec<TargetPose>) -> Result<Self, PlanError> {
        if let Some(i) = waypoints.iter().position(|wp| !wp.is_finite()) {
            return Err(PlanError::NonFiniteWaypoint(i));
        }
        Ok(Self { waypoints })
    }

    /// Plan of horizontal `(east, north)` points flown at a single altitude.
    pub fn flat(points: &[(f64, f64)], altitude: f64) -> Result<Self, PlanError> {
        Self::new(points.iter().map(|&(e, n)| TargetPose::new(e, n, altitude)).collect())
    }

    pub fn len(&self) -> usize { self.waypoints.len() }
    pub fn is_empty(&self) -> bool { self.waypoints.is_empty() }
    pub fn get(&self, idx: usize) -> Option<TargetPose> { self.waypoints.get(idx).copied() }
    pub fn iter(&self) -> impl Iterator<Item = &TargetPose> { self.waypoints.iter() }
}
