use std::time::Duration;
use strum_macros::{Display, EnumIter};

use crate::mission_config::Cooldowns;

/// Mission phases in their only legal order.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum MissionState {
    #[strum(serialize = "READY_TO_FLY")]
    ReadyToFly,
    #[strum(serialize = "TAKE_OFF")]
    TakeOff,
    #[strum(serialize = "GO_TO_POINT")]
    GoToPoint,
    #[strum(serialize = "LAND")]
    Land,
    #[strum(serialize = "DONE")]
    Done,
}

impl MissionState {
    /// Successor state; `None` once the mission is done.
    pub fn next(self) -> Option<MissionState> {
        match self {
            MissionState::ReadyToFly => Some(MissionState::TakeOff),
            MissionState::TakeOff => Some(MissionState::GoToPoint),
            MissionState::GoToPoint => Some(MissionState::Land),
            MissionState::Land => Some(MissionState::Done),
            MissionState::Done => None,
        }
    }

    pub fn is_terminal(self) -> bool { self == MissionState::Done }

    /// Minimum spacing between command attempts, `None` for states that issue no commands.
    pub fn cooldown(self, cooldowns: &Cooldowns) -> Option<Duration> {
        match self {
            MissionState::ReadyToFly => Some(cooldowns.ready_to_fly),
            MissionState::TakeOff => Some(cooldowns.take_off),
            MissionState::Land => Some(cooldowns.land),
            MissionState::GoToPoint | MissionState::Done => None,
        }
    }
}
