//! Travel direction and operational state of an elevator car.

use std::fmt;

/// The direction a car is moving in, or `Stopped` when it is not moving.
///
/// Also used as the `callDirection` of `AddDestination`: `Up`/`Down` register a
/// pickup, `Stopped` registers a drop-off.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Up,
    Down,
    #[default]
    Stopped,
}

impl Direction {
    /// The heading this direction points in, or `None` for `Stopped`.
    #[inline]
    pub fn heading(self) -> Option<Heading> {
        match self {
            Direction::Up      => Some(Heading::Up),
            Direction::Down    => Some(Heading::Down),
            Direction::Stopped => None,
        }
    }

    #[inline]
    pub fn is_stopped(self) -> bool {
        self == Direction::Stopped
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up      => "Up",
            Direction::Down    => "Down",
            Direction::Stopped => "Stopped",
        })
    }
}

/// A direction of travel that is never `Stopped`.
///
/// Used for hall calls, pickups, floor queues, and the car's remembered last
/// travel direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Heading {
    Up,
    Down,
}

impl Heading {
    /// Heading from `from` toward `to`; `None` when they are equal.
    #[inline]
    pub fn between(from: i32, to: i32) -> Option<Heading> {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Some(Heading::Up),
            std::cmp::Ordering::Less    => Some(Heading::Down),
            std::cmp::Ordering::Equal   => None,
        }
    }

    /// Signed one-floor offset: `+1` for `Up`, `-1` for `Down`.
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Heading::Up   => 1,
            Heading::Down => -1,
        }
    }
}

impl From<Heading> for Direction {
    #[inline]
    fn from(h: Heading) -> Direction {
        match h {
            Heading::Up   => Direction::Up,
            Heading::Down => Direction::Down,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Direction::from(*self).fmt(f)
    }
}

/// Operational state of a car.
///
/// `OutOfService` is terminal: the dispatcher never selects such a car and
/// `Step` leaves it untouched.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum ElevatorState {
    Moving,
    #[default]
    Stopped,
    DoorsOpen,
    OutOfService,
}

impl ElevatorState {
    #[inline]
    pub fn in_service(self) -> bool {
        self != ElevatorState::OutOfService
    }
}

impl fmt::Display for ElevatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElevatorState::Moving       => "Moving",
            ElevatorState::Stopped      => "Stopped",
            ElevatorState::DoorsOpen    => "DoorsOpen",
            ElevatorState::OutOfService => "OutOfService",
        })
    }
}
