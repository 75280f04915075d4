pub(crate) mod command_result;
pub(crate) mod response_common;
pub(crate) mod set_mode;
pub(crate) mod setpoint_ack;
pub(crate) mod vehicle_state;
