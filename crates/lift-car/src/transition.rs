//! The car's transition function.
//!
//! [`transition`] takes the current [`Motion`] and the car's [`StopBook`] and
//! returns the next `Motion` plus the ordered [`Effect`]s the car must apply
//! to its passengers and stops.  It reads nothing else and mutates nothing.

use std::collections::BTreeSet;

use lift_core::{Direction, ElevatorState, Heading};

use crate::stops::{next_logical_stop, Pickup, StopBook};

/// Position and state of a car.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Motion {
    pub floor:        i32,
    pub direction:    Direction,
    pub state:        ElevatorState,
    /// The most recent non-stopped travel direction.  Survives idle periods;
    /// `None` until the car first moves.
    pub last_heading: Option<Heading>,
}

impl Motion {
    /// Idle with doors closed at `floor`, no travel memory.
    pub fn at_rest(floor: i32) -> Self {
        Self {
            floor,
            direction:    Direction::Stopped,
            state:        ElevatorState::Stopped,
            last_heading: None,
        }
    }

    /// Direction used to evaluate the next stop: the current one, else the
    /// remembered one.
    #[inline]
    pub fn evaluation_heading(&self) -> Option<Heading> {
        self.direction.heading().or(self.last_heading)
    }
}

/// A side effect the car applies after a transition, in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Drop everyone bound for `floor` and retire it as a drop-off.
    Unload { floor: i32 },
    CloseDoors,
    /// Moved exactly one floor.
    Move { from: i32, to: i32 },
    /// Doors opened at `floor`.
    Arrive { floor: i32 },
    /// The pickup was serviced by this arrival.
    ClearPickup(Pickup),
    /// Nothing left to do.
    Idle,
}

/// Result of [`transition`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub motion:  Motion,
    pub effects: Vec<Effect>,
}

/// Advance `motion` by one tick against `stops`.
///
/// An `OutOfService` car is returned unchanged with no effects.
pub fn transition(motion: Motion, stops: &StopBook) -> Transition {
    let mut next = motion;
    let mut effects = Vec::new();

    if motion.state == ElevatorState::OutOfService {
        return Transition { motion, effects };
    }

    let mut pending: BTreeSet<i32> = stops.upcoming();

    // ── ① Doors open: unload, then close ──────────────────────────────────
    if motion.state == ElevatorState::DoorsOpen {
        effects.push(Effect::Unload { floor: motion.floor });
        effects.push(Effect::CloseDoors);
        next.state = ElevatorState::Stopped;
        // The unload retires this floor's drop-off; a pickup here still counts.
        if stops.pickups_at(motion.floor).next().is_none() {
            pending.remove(&motion.floor);
        }
    }

    // ── ② Next logical stop ───────────────────────────────────────────────
    match next_logical_stop(next.floor, next.evaluation_heading(), &pending) {
        // ⑤ Nothing to do.
        None => {
            next.state = ElevatorState::Stopped;
            next.direction = Direction::Stopped;
            effects.push(Effect::Idle);
        }

        // ③ Already there.
        Some(target) if target == next.floor => {
            arrive(&mut next, stops, &mut effects);
        }

        // ④ One floor toward the target; stop early on any pending floor.
        Some(target) => {
            let heading = if target > next.floor { Heading::Up } else { Heading::Down };
            let from = next.floor;
            next.floor += heading.delta();
            next.direction = heading.into();
            next.state = ElevatorState::Moving;
            next.last_heading = Some(heading);
            effects.push(Effect::Move { from, to: next.floor });

            if pending.contains(&next.floor) {
                arrive(&mut next, stops, &mut effects);
            }
        }
    }

    Transition { motion: next, effects }
}

/// Open the doors at `next.floor` and clear the pickup it services.
///
/// The pickup matching the last travel heading is cleared; if there is none,
/// every pickup at this floor is.
fn arrive(next: &mut Motion, stops: &StopBook, effects: &mut Vec<Effect>) {
    let floor = next.floor;
    next.state = ElevatorState::DoorsOpen;
    next.direction = Direction::Stopped;
    effects.push(Effect::Arrive { floor });

    let exact = next
        .last_heading
        .map(|h| Pickup::new(floor, h))
        .filter(|p| stops.has_pickup(*p));

    match exact {
        Some(p) => effects.push(Effect::ClearPickup(p)),
        None => effects.extend(stops.pickups_at(floor).map(Effect::ClearPickup)),
    }
}
