//! `ElevatorFactory`: mints cars with ids from an explicit sequence.

use lift_core::{ElevatorId, IdSequence, LiftError};

use crate::{CarError, CarResult, Elevator, Shaft};

/// Creates cars that share a capacity, a shaft, and a default starting floor.
///
/// Ids come from the factory's own [`IdSequence`]; a failed `create` does not
/// consume an id.
#[derive(Debug, Clone)]
pub struct ElevatorFactory {
    ids:           IdSequence<ElevatorId>,
    capacity:      usize,
    default_start: Option<i32>,
    shaft:         Shaft,
}

impl ElevatorFactory {
    pub fn new(
        ids:           IdSequence<ElevatorId>,
        capacity:      i32,
        default_start: Option<i32>,
        shaft:         Shaft,
    ) -> CarResult<Self> {
        if capacity <= 0 {
            return Err(LiftError::InvalidCapacity(capacity).into());
        }
        if let Some(floor) = default_start {
            if floor < 0 {
                return Err(LiftError::InvalidStartingFloor(floor).into());
            }
        }
        Ok(Self {
            ids,
            capacity: capacity as usize,
            default_start,
            shaft,
        })
    }

    #[inline]
    pub fn shaft(&self) -> Shaft {
        self.shaft
    }

    /// Create a car at `starting_floor`, or at the default if `None`.
    pub fn create(&mut self, starting_floor: Option<i32>) -> CarResult<Elevator> {
        let floor = starting_floor
            .or(self.default_start)
            .ok_or(LiftError::UnresolvedStartingFloor)?;
        if !self.shaft.contains(floor) {
            return Err(CarError::StartOutOfRange {
                floor,
                lowest:  self.shaft.lowest,
                highest: self.shaft.highest,
            });
        }
        Elevator::new(self.ids.next_id(), floor, self.capacity, self.shaft)
    }
}
