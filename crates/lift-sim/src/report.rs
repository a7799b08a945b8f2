//! Per-tick summary returned by `Building::step_simulation`.

use lift_car::ElevatorFault;
use lift_core::{ElevatorId, Tick};

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:         Tick,
    /// Cars that moved a floor.
    pub moves:        usize,
    /// Cars whose doors opened.
    pub arrivals:     usize,
    pub boarded:      usize,
    pub alighted:     usize,
    /// Stranded calls handed to a car in the redispatch phase.
    pub redispatched: usize,
    /// Riders still waiting on floors at the end of the tick.
    pub waiting:      usize,
    /// Cars that went out of service this tick.
    pub faults:       Vec<(ElevatorId, ElevatorFault)>,
}
