//! Configuration error type shared by all `lift-*` crates.

use thiserror::Error;

use crate::Setting;

/// Fail-fast configuration and precondition errors.
///
/// These are raised synchronously where a value is set or resolved and are
/// never retried; the caller must fix the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiftError {
    #[error("number of floors must be positive, got {0}")]
    InvalidFloorCount(i32),

    #[error("number of elevators must be at least 1, got {0}")]
    InvalidElevatorCount(i32),

    #[error("maximum elevator capacity must be positive, got {0}")]
    InvalidCapacity(i32),

    #[error("starting floor must not be negative, got {0}")]
    InvalidStartingFloor(i32),

    #[error("setting `{0}` has not been configured")]
    Unset(Setting),

    #[error("no starting floor given and no valid default starting floor configured")]
    UnresolvedStartingFloor,
}

/// Shorthand result type for `lift-core`.
pub type LiftResult<T> = Result<T, LiftError>;
