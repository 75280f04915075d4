//! Operator console: the manual launch gate read from standard input.

mod launch_gate;

pub use launch_gate::LaunchGate;
