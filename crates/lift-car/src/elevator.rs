//! The `Elevator` car.

use std::collections::BTreeSet;

use log::{debug, error, trace};

use lift_core::{Direction, ElevatorId, ElevatorState, LiftError, Passenger};

use crate::stops::{Pickup, StopBook};
use crate::transition::{transition, Effect, Motion};
use crate::{CarError, CarResult, ElevatorFault};

/// The floors a car can reach, inclusive on both ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Shaft {
    pub lowest:  i32,
    pub highest: i32,
}

impl Shaft {
    pub fn new(lowest: i32, highest: i32) -> Self {
        Self { lowest, highest }
    }

    /// Floors `1..=floors`.
    pub fn for_floors(floors: i32) -> Self {
        Self::new(1, floors)
    }

    #[inline]
    pub fn contains(&self, floor: i32) -> bool {
        (self.lowest..=self.highest).contains(&floor)
    }
}

/// What happened to one car during one [`Elevator::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// `(from, to)` when the car moved a floor.
    pub moved:    Option<(i32, i32)>,
    /// Floor where the doors opened this step.
    pub arrived:  Option<i32>,
    /// Passengers that got off.
    pub alighted: Vec<Passenger>,
    /// Set when this step put the car out of service.
    pub fault:    Option<ElevatorFault>,
}

/// One elevator car: position, state, riders, and outstanding stops.
///
/// Invariant: `passengers.len() <= max_capacity` at all times.
#[derive(Debug, Clone)]
pub struct Elevator {
    id:           ElevatorId,
    motion:       Motion,
    shaft:        Shaft,
    max_capacity: usize,
    passengers:   Vec<Passenger>,
    stops:        StopBook,
}

impl Elevator {
    /// A car idle at `start_floor` with doors closed.
    pub fn new(id: ElevatorId, start_floor: i32, max_capacity: usize, shaft: Shaft) -> CarResult<Self> {
        if max_capacity == 0 {
            return Err(LiftError::InvalidCapacity(0).into());
        }
        if !shaft.contains(start_floor) {
            return Err(CarError::StartOutOfRange {
                floor:   start_floor,
                lowest:  shaft.lowest,
                highest: shaft.highest,
            });
        }
        Ok(Self {
            id,
            motion: Motion::at_rest(start_floor),
            shaft,
            max_capacity,
            passengers: Vec::with_capacity(max_capacity),
            stops: StopBook::new(),
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    #[inline]
    pub fn current_floor(&self) -> i32 {
        self.motion.floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    #[inline]
    pub fn state(&self) -> ElevatorState {
        self.motion.state
    }

    #[inline]
    pub fn motion(&self) -> Motion {
        self.motion
    }

    #[inline]
    pub fn shaft(&self) -> Shaft {
        self.shaft
    }

    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    #[inline]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.max_capacity
    }

    /// Idle: not moving and no direction.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.motion.direction.is_stopped()
    }

    #[inline]
    pub fn in_service(&self) -> bool {
        self.motion.state.in_service()
    }

    /// `true` if a rider on board is bound for `floor`.
    pub fn has_passenger_for(&self, floor: i32) -> bool {
        self.passengers.iter().any(|p| p.destination == floor)
    }

    pub fn stops(&self) -> &StopBook {
        &self.stops
    }

    pub fn drop_off_floors(&self) -> &BTreeSet<i32> {
        self.stops.drop_offs()
    }

    pub fn assigned_pickups(&self) -> &BTreeSet<Pickup> {
        self.stops.pickups()
    }

    /// Drop-off floors plus pickup floors, sorted.
    pub fn all_upcoming_stops(&self) -> BTreeSet<i32> {
        self.stops.upcoming()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register a stop.  `Up`/`Down` is a pickup in that heading; `Stopped`
    /// is a drop-off.  Returns `true` if the stop was new.
    ///
    /// State and direction are recomputed on the next [`step`][Self::step].
    pub fn add_destination(&mut self, floor: i32, call: Direction) -> bool {
        let added = match call.heading() {
            Some(heading) => self.stops.add_pickup(Pickup::new(floor, heading)),
            None          => self.stops.add_drop_off(floor),
        };
        if added {
            trace!("E{}: registered stop {floor} ({call})", self.id.get());
        }
        added
    }

    /// Board `p` if there is room.  A full car is left untouched.
    pub fn add_passenger(&mut self, p: Passenger) -> bool {
        if self.is_full() {
            return false;
        }
        self.stops.add_drop_off(p.destination);
        self.passengers.push(p);
        true
    }

    /// Remove every rider bound for the current floor.
    ///
    /// Idempotent; the floor stops being a drop-off once nobody on board
    /// needs it.
    pub fn unload_passengers(&mut self) -> Vec<Passenger> {
        let floor = self.motion.floor;
        let (alighted, staying): (Vec<_>, Vec<_>) =
            self.passengers.drain(..).partition(|p| p.destination == floor);
        self.passengers = staying;
        if !self.has_passenger_for(floor) {
            self.stops.remove_drop_off(floor);
        }
        if !alighted.is_empty() {
            debug!("E{}: {} passenger(s) alighted at floor {floor}", self.id.get(), alighted.len());
        }
        alighted
    }

    /// Teleport the car into `motion` without running the state machine.
    ///
    /// Meant for initial placement and for tests that need a car mid-run.
    pub fn place(&mut self, motion: Motion) {
        self.motion = motion;
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Advance one tick.
    ///
    /// Never fails: a fault is logged and leaves the car `OutOfService`.  An
    /// out-of-service car does not move.
    pub fn step(&mut self) -> StepReport {
        if !self.in_service() {
            return StepReport::default();
        }
        match self.try_step() {
            Ok(report) => report,
            Err(fault) => {
                error!("E{}: {fault}; taking car out of service", self.id.get());
                self.motion.state = ElevatorState::OutOfService;
                self.motion.direction = Direction::Stopped;
                StepReport { fault: Some(fault), ..StepReport::default() }
            }
        }
    }

    fn try_step(&mut self) -> Result<StepReport, ElevatorFault> {
        self.check_invariants()?;

        let next = transition(self.motion, &self.stops);
        if !self.shaft.contains(next.motion.floor) {
            return Err(self.out_of_shaft(next.motion.floor));
        }

        let mut report = StepReport::default();
        for effect in next.effects {
            match effect {
                Effect::Unload { floor } => {
                    debug_assert_eq!(floor, self.motion.floor);
                    report.alighted = self.unload_passengers();
                }
                Effect::CloseDoors => {
                    trace!("E{}: doors closing at floor {}", self.id.get(), self.motion.floor);
                }
                Effect::Move { from, to } => {
                    trace!("E{}: {from} -> {to}", self.id.get());
                    report.moved = Some((from, to));
                }
                Effect::Arrive { floor } => {
                    debug!("E{}: doors open at floor {floor}", self.id.get());
                    report.arrived = Some(floor);
                }
                Effect::ClearPickup(p) => {
                    self.stops.remove_pickup(p);
                }
                Effect::Idle => {}
            }
        }
        self.motion = next.motion;
        Ok(report)
    }

    fn check_invariants(&self) -> Result<(), ElevatorFault> {
        if self.passengers.len() > self.max_capacity {
            return Err(ElevatorFault::CapacityExceeded {
                carried:  self.passengers.len(),
                capacity: self.max_capacity,
            });
        }
        if !self.shaft.contains(self.motion.floor) {
            return Err(self.out_of_shaft(self.motion.floor));
        }
        if let Some(&floor) = self.stops.upcoming().iter().find(|&&f| !self.shaft.contains(f)) {
            return Err(ElevatorFault::StopOutOfRange {
                floor,
                lowest:  self.shaft.lowest,
                highest: self.shaft.highest,
            });
        }
        Ok(())
    }

    fn out_of_shaft(&self, floor: i32) -> ElevatorFault {
        ElevatorFault::FloorOutOfRange {
            floor,
            lowest:  self.shaft.lowest,
            highest: self.shaft.highest,
        }
    }

    // ── Status ────────────────────────────────────────────────────────────

    /// The status line for this car.
    pub fn status_line(&self) -> String {
        let stops: Vec<String> = self.all_upcoming_stops().iter().map(i32::to_string).collect();
        format!(
            "Elevator E{}: F{}, Dir:{}, St:{}, Pax:{}/{}, Stops:[{}]",
            self.id.get(),
            self.motion.floor,
            self.motion.direction,
            self.motion.state,
            self.passengers.len(),
            self.max_capacity,
            stops.join(", "),
        )
    }
}
