use lift_car::CarError;
use lift_core::{ElevatorId, LiftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("building is already initialised")]
    AlreadyInitialised,

    #[error("floor at position {index} is numbered {got}, expected {expected}")]
    FloorLayout {
        index:    usize,
        expected: i32,
        got:      i32,
    },

    #[error("elevator {0} appears more than once")]
    DuplicateElevator(ElevatorId),

    #[error("elevator {elevator} is at floor {floor}, outside the building's 1..={floors}")]
    ElevatorOutsideBuilding {
        elevator: ElevatorId,
        floor:    i32,
        floors:   i32,
    },

    #[error("{what} length {got} does not match elevator count {expected}")]
    ElevatorCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Config(#[from] LiftError),

    #[error(transparent)]
    Car(#[from] CarError),

    #[error("call script parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
