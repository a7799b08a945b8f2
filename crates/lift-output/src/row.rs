//! Plain data rows written by output backends.

use lift_car::Elevator;
use lift_core::{Direction, ElevatorState, Tick};
use lift_sim::TickReport;

/// One car's state at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:       u64,
    pub elevator:   u32,
    pub floor:      i32,
    pub direction:  Direction,
    pub state:      ElevatorState,
    pub passengers: u32,
    /// Upcoming stops, ascending, separated by spaces (`"3 7 9"`).
    pub stops:      String,
}

impl ElevatorSnapshotRow {
    pub fn capture(tick: Tick, car: &Elevator) -> Self {
        let stops: Vec<String> = car.all_upcoming_stops().iter().map(i32::to_string).collect();
        Self {
            tick:       tick.0,
            elevator:   car.id().get(),
            floor:      car.current_floor(),
            direction:  car.direction(),
            state:      car.state(),
            passengers: car.passenger_count() as u32,
            stops:      stops.join(" "),
        }
    }
}

/// Counters for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:     u64,
    pub moves:    u32,
    pub arrivals: u32,
    pub boarded:  u32,
    pub alighted: u32,
    pub waiting:  u32,
    pub faults:   u32,
}

impl From<&TickReport> for TickSummaryRow {
    fn from(r: &TickReport) -> Self {
        Self {
            tick:     r.tick.0,
            moves:    r.moves as u32,
            arrivals: r.arrivals as u32,
            boarded:  r.boarded as u32,
            alighted: r.alighted as u32,
            waiting:  r.waiting as u32,
            faults:   r.faults.len() as u32,
        }
    }
}
