//! The `Building` dispatcher and its tick.

use std::collections::HashSet;

use log::{debug, trace, warn};

use lift_car::{Elevator, Pickup};
use lift_core::{ElevatorId, ElevatorState, Heading, IdSequence, Passenger, PassengerId, SimRng, Tick};
use lift_floor::Floor;

use crate::dispatch::{best_of, find_best_elevator_for_call};
use crate::loading::load_passengers;
use crate::script::CallScript;
use crate::{BuildingObserver, BuildingStatus, SimError, SimResult, TickReport};

/// Owns every car and floor and drives them one tick at a time.
///
/// A `Building` starts uninitialised; [`initialise`][Self::initialise] must be
/// called once before calls or ticks do anything.  Use
/// [`BuildingBuilder`][crate::BuildingBuilder] to build one from a config.
pub struct Building {
    elevators:     Vec<Elevator>,
    floors:        Vec<Floor>,
    initialised:   bool,
    rng:           SimRng,
    passenger_ids: IdSequence<PassengerId>,
    /// Re-score stranded calls after the loading phase.
    redispatch:    bool,
    tick:          Tick,
}

impl Building {
    /// An uninitialised building drawing destinations from `rng` and ids from
    /// `passenger_ids`.
    pub fn new(rng: SimRng, passenger_ids: IdSequence<PassengerId>) -> Self {
        Self {
            elevators: Vec::new(),
            floors: Vec::new(),
            initialised: false,
            rng,
            passenger_ids,
            redispatch: true,
            tick: Tick::ZERO,
        }
    }

    /// One-time setup.
    ///
    /// Floors must be numbered `1..=n` in order, elevator ids must be unique,
    /// and every car must start inside the building.
    pub fn initialise(&mut self, elevators: Vec<Elevator>, floors: Vec<Floor>) -> SimResult<()> {
        if self.initialised {
            return Err(SimError::AlreadyInitialised);
        }

        for (index, floor) in floors.iter().enumerate() {
            let expected = index as i32 + 1;
            if floor.number() != expected {
                return Err(SimError::FloorLayout { index, expected, got: floor.number() });
            }
        }

        let total = floors.len() as i32;
        let mut seen = HashSet::with_capacity(elevators.len());
        for car in &elevators {
            if !seen.insert(car.id()) {
                return Err(SimError::DuplicateElevator(car.id()));
            }
            if total > 0 && !(1..=total).contains(&car.current_floor()) {
                return Err(SimError::ElevatorOutsideBuilding {
                    elevator: car.id(),
                    floor:    car.current_floor(),
                    floors:   total,
                });
            }
        }

        debug!("building initialised: {} floors, {} elevators", floors.len(), elevators.len());
        self.elevators = elevators;
        self.floors = floors;
        self.initialised = true;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_initialised(&self) -> bool {
        self.initialised
    }

    #[inline]
    pub fn total_floors(&self) -> i32 {
        self.floors.len() as i32
    }

    /// The next tick `step_simulation` will run.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn elevator(&self, id: ElevatorId) -> Option<&Elevator> {
        self.elevators.iter().find(|e| e.id() == id)
    }

    /// Mutable access for an operator console (e.g. registering a cab call).
    pub fn elevator_mut(&mut self, id: ElevatorId) -> Option<&mut Elevator> {
        self.elevators.iter_mut().find(|e| e.id() == id)
    }

    /// Floor `number`, if it exists.
    pub fn floor(&self, number: i32) -> Option<&Floor> {
        floor_index(self.floors.len(), number).map(|i| &self.floors[i])
    }

    /// Riders waiting on every floor.
    pub fn waiting_total(&self) -> usize {
        self.floors.iter().map(Floor::total_waiting).sum()
    }

    /// Riders on board every car.
    pub fn riding_total(&self) -> usize {
        self.elevators.iter().map(Elevator::passenger_count).sum()
    }

    pub fn set_redispatch(&mut self, on: bool) {
        self.redispatch = on;
    }

    // ── Calls ─────────────────────────────────────────────────────────────

    /// A hall call: `number_of_people` riders appear on `floor` wanting to go
    /// `heading`.
    ///
    /// Each rider gets a uniformly random destination in that heading and is
    /// queued on the floor; riders with no possible destination (up from the
    /// top floor, down from the ground floor) are skipped.  The best-scoring
    /// car then receives a pickup for `(floor, heading)`.  Returns that car,
    /// or `None` if the call was dropped or no car qualified (the riders stay
    /// queued).
    pub fn request_elevator(&mut self, floor: i32, heading: Heading, number_of_people: u32) -> Option<ElevatorId> {
        if !self.initialised {
            warn!("call at floor {floor} ignored: building not initialised");
            return None;
        }
        if self.floors.is_empty() {
            warn!("call at floor {floor} ignored: building has no floors");
            return None;
        }
        let total = self.total_floors();
        let Some(index) = floor_index(self.floors.len(), floor) else {
            warn!("call at floor {floor} ignored: floors are 1..={total}");
            return None;
        };

        let mut queued = 0;
        for _ in 0..number_of_people {
            let destination = match heading {
                Heading::Up if floor < total  => self.rng.gen_range(floor + 1..=total),
                Heading::Down if floor > 1    => self.rng.gen_range(1..floor),
                _ => {
                    warn!("no {heading} destination from floor {floor}; rider skipped");
                    continue;
                }
            };
            let rider = Passenger::new(self.passenger_ids.next_id(), floor, destination);
            trace!("passenger {} waiting at floor {floor} for floor {destination}", rider.id);
            if self.floors[index].add_waiting_person(rider) {
                queued += 1;
            }
        }
        if queued == 0 {
            return None;
        }

        self.assign_call(floor, heading)
    }

    /// Score every car for a call and return the winner without assigning it.
    pub fn find_best_elevator_for_call(&self, floor: i32, heading: Heading) -> Option<ElevatorId> {
        find_best_elevator_for_call(&self.elevators, floor, heading, self.total_floors())
    }

    fn assign_call(&mut self, floor: i32, heading: Heading) -> Option<ElevatorId> {
        if self.elevators.is_empty() {
            warn!("call at floor {floor} ({heading}) left queued: building has no elevators");
            return None;
        }
        let Some(id) = self.find_best_elevator_for_call(floor, heading) else {
            warn!("call at floor {floor} ({heading}) left queued: no eligible elevator");
            return None;
        };
        if let Some(car) = self.elevator_mut(id) {
            car.add_destination(floor, heading.into());
            debug!("call at floor {floor} ({heading}) assigned to E{}", id.get());
        }
        Some(id)
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the whole building by one tick.
    pub fn step_simulation(&mut self) -> TickReport {
        let mut report = TickReport { tick: self.tick, ..TickReport::default() };
        if !self.initialised {
            warn!("step ignored: building not initialised");
            return report;
        }

        // ── Phase 1: move every car ───────────────────────────────────────
        for car in &mut self.elevators {
            let step = car.step();
            if step.moved.is_some() {
                report.moves += 1;
            }
            if step.arrived.is_some() {
                report.arrivals += 1;
            }
            report.alighted += step.alighted.len();
            if let Some(fault) = step.fault {
                report.faults.push((car.id(), fault));
            }
        }

        // ── Phase 2: board riders into cars with doors open ───────────────
        let floor_count = self.floors.len();
        for car in &mut self.elevators {
            if car.state() != ElevatorState::DoorsOpen {
                continue;
            }
            if let Some(i) = floor_index(floor_count, car.current_floor()) {
                report.boarded += load_passengers(car, &mut self.floors[i]).len();
            }
        }

        // ── Phase 3: re-dispatch stranded calls ───────────────────────────
        if self.redispatch {
            report.redispatched = self.redispatch_stranded();
        }

        report.waiting = self.waiting_total();
        self.tick = self.tick.next();
        report
    }

    /// Hand every waiting `(floor, heading)` that no in-service car is
    /// assigned to back to the scorer.
    ///
    /// A car standing with its doors open on that floor is skipped; it can
    /// take the call once it has left.
    fn redispatch_stranded(&mut self) -> usize {
        let mut stranded = Vec::new();
        for floor in &self.floors {
            for heading in [Heading::Up, Heading::Down] {
                if floor.waiting_count(heading) == 0 {
                    continue;
                }
                let pickup = Pickup::new(floor.number(), heading);
                let covered = self
                    .elevators
                    .iter()
                    .any(|car| car.in_service() && car.stops().has_pickup(pickup));
                if !covered {
                    stranded.push(pickup);
                }
            }
        }

        let total = self.total_floors();
        let mut assigned = 0;
        for p in stranded {
            let candidates = self
                .elevators
                .iter()
                .filter(|car| !(car.state() == ElevatorState::DoorsOpen && car.current_floor() == p.floor));
            let Some(id) = best_of(candidates, p.floor, p.heading, total) else {
                continue;
            };
            if let Some(car) = self.elevator_mut(id) {
                car.add_destination(p.floor, p.heading.into());
                debug!("stranded call at floor {} ({}) assigned to E{}", p.floor, p.heading, id.get());
                assigned += 1;
            }
        }
        assigned
    }

    /// Run `n` ticks, reporting each to `observer`.
    pub fn run_ticks<O: BuildingObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.tick);
    }

    /// Run `n` ticks, placing the calls `script` holds for each tick before
    /// stepping.
    pub fn run_script<O: BuildingObserver>(&mut self, script: &mut CallScript, n: u64, observer: &mut O) {
        for _ in 0..n {
            for call in script.drain_tick(self.tick) {
                self.request_elevator(call.floor, call.heading, call.people);
            }
            self.observed_tick(observer);
        }
        observer.on_sim_end(self.tick);
    }

    fn observed_tick<O: BuildingObserver>(&mut self, observer: &mut O) {
        observer.on_tick_start(self.tick);
        let report = self.step_simulation();
        observer.on_tick_end(&report, self);
    }

    // ── Status ────────────────────────────────────────────────────────────

    pub fn status(&self) -> BuildingStatus<'_> {
        BuildingStatus::new(&self.floors, &self.elevators)
    }

    /// Floor lines (ascending) followed by car lines (by id).
    pub fn display_status(&self) -> Vec<String> {
        self.status().lines()
    }
}

/// Index of floor `number` in a `1..=count` layout.
fn floor_index(count: usize, number: i32) -> Option<usize> {
    (number >= 1 && number as usize <= count).then(|| number as usize - 1)
}
