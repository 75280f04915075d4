/// Result of a single sequencer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickSignal {
    Continue,
    Done,
}

/// Why a mission phase or the mission loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpExitSignal {
    Completed,
    Cancelled,
}
