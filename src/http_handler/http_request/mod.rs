use super::http_response::{command_result, set_mode, setpoint_ack};

pub mod arming_post;
pub mod command_tol_post;
pub mod request_common;
pub mod set_mode_post;
pub mod setpoint_local_post;
pub mod state_stream_get;
