use crate::flight_control::TargetPose;
use crate::mode_control::{PlanError, WaypointPlan};
use std::{env, str::FromStr, time::Duration};
use strum_macros::{Display, EnumString};

/// Minimum rate at which the autopilot expects setpoints before it falls back out of
/// external-control mode.
pub const WATCHDOG_MIN_RATE_HZ: f64 = 2.0;
/// Required margin between the setpoint rate and [`WATCHDOG_MIN_RATE_HZ`].
pub const WATCHDOG_SAFETY_FACTOR: f64 = 2.0;

const DEF_BRIDGE_URL: &str = "http://localhost:8080";
const DEF_SETPOINT_FRAME: &str = "map";
const DEF_CONTROL_MODE: &str = "GUIDED";
const DEF_SETPOINT_RATE_HZ: f64 = 10.0;

const READY_COOLDOWN: Duration = Duration::from_millis(500);
const TAKE_OFF_COOLDOWN: Duration = Duration::from_secs(1);
const LAND_COOLDOWN: Duration = Duration::from_secs(1);
const TAKE_OFF_ALTITUDE: f64 = 1.0;
const TAKE_OFF_SETTLE: Duration = Duration::from_secs(10);
const WAYPOINT_DWELL: Duration = Duration::from_secs(10);
const PRIMING_SETPOINTS: usize = 100;
const ATTEMPT_WARN_THRESHOLD: u32 = 20;
const INITIAL_TARGET: TargetPose = TargetPose::new(0.0, 0.0, 1.0);
const LANDING_SITE: LandingSite = LandingSite { lat: 0.0, lon: 0.0, alt: 0.0 };
const SQUARE_ALTITUDE: f64 = 1.0;
const SQUARE_CORNERS: [(f64, f64); 5] = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)];

/// Axis convention the autopilot uses for local position setpoints.
///
/// Waypoints are always authored as (east, north, up). The convention decides how
/// those three values are laid onto the wire `x, y, z` fields.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum AxisConvention {
    /// x = east, y = north, z = up.
    #[strum(serialize = "ENU")]
    Enu,
    /// x = north, y = east, z = down.
    #[strum(serialize = "NED")]
    Ned,
}

/// Coordinate handed to the land request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingSite {
    pub lat: f64,
    pub lon: f64,
    pub alt: f64,
}

#[derive(Debug, Display)]
pub enum ConfigError {
    #[strum(to_string = "missing environment variable {name}")]
    MissingVariable { name: &'static str },
    #[strum(to_string = "invalid value '{value}' for {name}")]
    InvalidVariable { name: &'static str, value: String },
    #[strum(to_string = "setpoint rate {rate}Hz does not keep the autopilot watchdog fed")]
    SetpointRateTooLow { rate: f64 },
    InvalidPlan(PlanError),
}

impl std::error::Error for ConfigError {}

impl From<PlanError> for ConfigError {
    fn from(value: PlanError) -> Self { ConfigError::InvalidPlan(value) }
}

/// Per-state cooldowns gating command re-issue.
#[derive(Debug, Clone, Copy)]
pub struct Cooldowns {
    pub ready_to_fly: Duration,
    pub take_off: Duration,
    pub land: Duration,
}

/// Process-wide mission configuration, assembled once at start-up.
#[derive(Debug, Clone)]
pub struct MissionConfig {
    pub bridge_url: String,
    pub axis_convention: AxisConvention,
    pub setpoint_frame: String,
    pub control_mode: String,
    pub setpoint_rate_hz: f64,
    pub cooldowns: Cooldowns,
    pub take_off_altitude: f64,
    pub take_off_settle: Duration,
    pub waypoint_dwell: Duration,
    pub priming_setpoints: usize,
    pub attempt_warn_threshold: u32,
    pub initial_target: TargetPose,
    pub landing_site: LandingSite,
    pub plan: WaypointPlan,
}

impl MissionConfig {
    /// Builds the configuration from the `OFFB_*` environment variables.
    ///
    /// `OFFB_AXIS_CONVENTION` has no default: a wrong axis convention makes the vehicle
    /// yaw towards the wrong heading, so it must always be stated explicitly.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where F: Fn(&str) -> Option<String> {
        const AXIS_VAR: &str = "OFFB_AXIS_CONVENTION";
        const RATE_VAR: &str = "OFFB_SETPOINT_RATE_HZ";

        let axis_raw = lookup(AXIS_VAR).ok_or(ConfigError::MissingVariable { name: AXIS_VAR })?;
        let axis_convention = AxisConvention::from_str(axis_raw.trim())
            .map_err(|_| ConfigError::InvalidVariable { name: AXIS_VAR, value: axis_raw.clone() })?;
        let setpoint_rate_hz = match lookup(RATE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidVariable { name: RATE_VAR, value: raw.clone() })?,
            None => DEF_SETPOINT_RATE_HZ,
        };
        let config = Self {
            bridge_url: lookup("OFFB_BRIDGE_URL").unwrap_or_else(|| DEF_BRIDGE_URL.to_string()),
            axis_convention,
            setpoint_frame: lookup("OFFB_SETPOINT_FRAME")
                .unwrap_or_else(|| DEF_SETPOINT_FRAME.to_string()),
            control_mode: lookup("OFFB_CONTROL_MODE")
                .unwrap_or_else(|| DEF_CONTROL_MODE.to_string()),
            setpoint_rate_hz,
            ..Self::with_defaults(axis_convention)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Compiled-in defaults for everything except the axis convention.
    pub fn with_defaults(axis_convention: AxisConvention) -> Result<Self, ConfigError> {
        Ok(Self {
            bridge_url: DEF_BRIDGE_URL.to_string(),
            axis_convention,
            setpoint_frame: DEF_SETPOINT_FRAME.to_string(),
            control_mode: DEF_CONTROL_MODE.to_string(),
            setpoint_rate_hz: DEF_SETPOINT_RATE_HZ,
            cooldowns: Cooldowns {
                ready_to_fly: READY_COOLDOWN,
                take_off: TAKE_OFF_COOLDOWN,
                land: LAND_COOLDOWN,
            },
            take_off_altitude: TAKE_OFF_ALTITUDE,
            take_off_settle: TAKE_OFF_SETTLE,
            waypoint_dwell: WAYPOINT_DWELL,
            priming_setpoints: PRIMING_SETPOINTS,
            attempt_warn_threshold: ATTEMPT_WARN_THRESHOLD,
            initial_target: INITIAL_TARGET,
            landing_site: LANDING_SITE,
            plan: WaypointPlan::flat(&SQUARE_CORNERS, SQUARE_ALTITUDE)?,
        })
    }

    /// Rejects setpoint rates that would not keep the autopilot's watchdog fed with margin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_rate = WATCHDOG_MIN_RATE_HZ * WATCHDOG_SAFETY_FACTOR;
        if !self.setpoint_rate_hz.is_finite() || self.setpoint_rate_hz < min_rate {
            return Err(ConfigError::SetpointRateTooLow { rate: self.setpoint_rate_hz });
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration { Duration::from_secs_f64(1.0 / self.setpoint_rate_hz) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn axis_convention_is_required() {
        let res = MissionConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(res, Err(ConfigError::MissingVariable { name: "OFFB_AXIS_CONVENTION" })));
    }

    #[test]
    fn axis_convention_rejects_unknown_values() {
        let res = MissionConfig::from_lookup(lookup_from(&[("OFFB_AXIS_CONVENTION", "NWU")]));
        assert!(matches!(res, Err(ConfigError::InvalidVariable { .. })));
    }

    #[test]
    fn axis_convention_is_case_insensitive() {
        let conf = MissionConfig::from_lookup(lookup_from(&[("OFFB_AXIS_CONVENTION", " ned ")]))
            .unwrap();
        assert_eq!(conf.axis_convention, AxisConvention::Ned);
        assert_eq!(conf.control_mode, "GUIDED");
        assert_eq!(conf.setpoint_frame, "map");
        assert_eq!(conf.bridge_url, DEF_BRIDGE_URL);
    }

    #[test]
    fn slow_setpoint_rate_is_rejected() {
        let res = MissionConfig::from_lookup(lookup_from(&[
            ("OFFB_AXIS_CONVENTION", "ENU"),
            ("OFFB_SETPOINT_RATE_HZ", "3"),
        ]));
        assert!(matches!(res, Err(ConfigError::SetpointRateTooLow { .. })));
    }

    #[test]
    fn default_rate_feeds_the_watchdog() {
        let conf = MissionConfig::with_defaults(AxisConvention::Enu).unwrap();
        assert!(conf.validate().is_ok());
        assert_eq!(conf.tick_period(), Duration::from_millis(100));
        assert_eq!(conf.plan.len(), 5);
    }
}
