use lift_core::LiftError;
use thiserror::Error;

/// Errors raised while constructing cars.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error(transparent)]
    Config(#[from] LiftError),

    #[error("starting floor {floor} is outside the shaft {lowest}..={highest}")]
    StartOutOfRange {
        floor:   i32,
        lowest:  i32,
        highest: i32,
    },
}

pub type CarResult<T> = Result<T, CarError>;

/// A runtime fault detected during `Elevator::step`.
///
/// Faults never propagate: the car logs the fault and goes `OutOfService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElevatorFault {
    #[error("stop {floor} is outside the shaft {lowest}..={highest}")]
    StopOutOfRange {
        floor:   i32,
        lowest:  i32,
        highest: i32,
    },

    #[error("car position {floor} is outside the shaft {lowest}..={highest}")]
    FloorOutOfRange {
        floor:   i32,
        lowest:  i32,
        highest: i32,
    },

    #[error("carrying {carried} passengers with capacity {capacity}")]
    CapacityExceeded {
        carried:  usize,
        capacity: usize,
    },
}
