//! Human-readable status dump.
//!
//! ```text
//! Floor 1: Waiting Up: 2, Waiting Down: 0
//! Floor 2: Waiting Up: 0, Waiting Down: 1
//! Elevator E1: F1, Dir:Up, St:Moving, Pax:3/8, Stops:[4, 6]
//! ```

use std::fmt;

use lift_car::Elevator;
use lift_floor::Floor;

/// Borrowed view of a building that renders as the status dump.
pub struct BuildingStatus<'a> {
    floors:    &'a [Floor],
    elevators: &'a [Elevator],
}

impl<'a> BuildingStatus<'a> {
    pub fn new(floors: &'a [Floor], elevators: &'a [Elevator]) -> Self {
        Self { floors, elevators }
    }

    /// Floor lines in ascending floor order, then car lines in id order.
    pub fn lines(&self) -> Vec<String> {
        let mut cars: Vec<&Elevator> = self.elevators.iter().collect();
        cars.sort_by_key(|e| e.id());

        self.floors
            .iter()
            .map(Floor::status_line)
            .chain(cars.into_iter().map(Elevator::status_line))
            .collect()
    }
}

impl fmt::Display for BuildingStatus<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
