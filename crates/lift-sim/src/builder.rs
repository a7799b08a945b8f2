//! Fluent builder for constructing an initialised [`Building`].

use lift_car::{ElevatorFactory, Shaft};
use lift_core::{BuildingConfig, ElevatorId, IdSequence, PassengerId, SimRng};
use lift_floor::Floor;

use crate::{Building, SimError, SimResult};

/// Fluent builder for [`Building`].
///
/// # Required inputs
///
/// - [`BuildingConfig`] with floors, elevators, and capacity set.  The
///   default starting floor is only required for cars without an explicit
///   starting floor.
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                |
/// |----------------------------|----------------------------------------|
/// | `.starting_floors(v)`      | every car at the default starting floor |
/// | `.elevator_ids(seq)`       | ids from 1                             |
/// | `.passenger_ids(seq)`      | ids from 1                             |
/// | `.redispatch_stranded(b)`  | `true`                                 |
///
/// # Example
///
/// ```rust,ignore
/// let config = BuildingConfig::with_values(10, 2, 8, 1)?;
/// let building = BuildingBuilder::new(config)
///     .starting_floors(vec![Some(1), Some(10)])
///     .build()?;
/// ```
pub struct BuildingBuilder {
    config:          BuildingConfig,
    starting_floors: Option<Vec<Option<i32>>>,
    elevator_ids:    IdSequence<ElevatorId>,
    passenger_ids:   IdSequence<PassengerId>,
    redispatch:      bool,
}

impl BuildingBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self {
            config,
            starting_floors: None,
            elevator_ids:    IdSequence::new(),
            passenger_ids:   IdSequence::new(),
            redispatch:      true,
        }
    }

    /// Shorthand for a building straight from `config`: every car at the
    /// default starting floor, ids from 1.
    pub fn from_config(config: &BuildingConfig) -> SimResult<Building> {
        Self::new(config.clone()).build()
    }

    /// Per-car starting floor (must be length `number_of_elevators`).
    /// `None` entries use the configured default.
    pub fn starting_floors(mut self, floors: Vec<Option<i32>>) -> Self {
        self.starting_floors = Some(floors);
        self
    }

    pub fn elevator_ids(mut self, ids: IdSequence<ElevatorId>) -> Self {
        self.elevator_ids = ids;
        self
    }

    pub fn passenger_ids(mut self, ids: IdSequence<PassengerId>) -> Self {
        self.passenger_ids = ids;
        self
    }

    /// Whether riders left waiting after the loading phase are re-scored
    /// every tick.
    pub fn redispatch_stranded(mut self, on: bool) -> Self {
        self.redispatch = on;
        self
    }

    /// Validate inputs, create floors and cars, and return an initialised
    /// [`Building`].
    pub fn build(self) -> SimResult<Building> {
        let floor_count = self.config.number_of_floors()?;
        let car_count = self.config.number_of_elevators()? as usize;
        let capacity = self.config.max_elevator_capacity()?;

        // ── Resolve starting floors ───────────────────────────────────────
        let starts = match self.starting_floors {
            Some(s) => {
                if s.len() != car_count {
                    return Err(SimError::ElevatorCountMismatch {
                        expected: car_count,
                        got:      s.len(),
                        what:     "starting floors",
                    });
                }
                s
            }
            None => vec![None; car_count],
        };

        // ── Create cars and floors ────────────────────────────────────────
        let mut factory = ElevatorFactory::new(
            self.elevator_ids,
            capacity,
            self.config.default_starting_floor(),
            Shaft::for_floors(floor_count),
        )?;
        let elevators = starts
            .into_iter()
            .map(|start| factory.create(start))
            .collect::<Result<Vec<_>, _>>()?;
        let floors = (1..=floor_count).map(Floor::new).collect();

        let mut building = Building::new(SimRng::new(self.config.seed), self.passenger_ids);
        building.initialise(elevators, floors)?;
        building.set_redispatch(self.redispatch);
        Ok(building)
    }
}
