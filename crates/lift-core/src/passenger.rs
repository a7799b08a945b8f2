//! The passenger travel intent.

use crate::{Heading, PassengerId};

/// One journey from `origin` to `destination`.
///
/// Immutable once created; a passenger is dropped when it is unloaded at its
/// destination.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Passenger {
    pub id:          PassengerId,
    pub origin:      i32,
    pub destination: i32,
}

impl Passenger {
    pub fn new(id: PassengerId, origin: i32, destination: i32) -> Self {
        Self { id, origin, destination }
    }

    /// Which way this passenger wants to travel; `None` if already there.
    #[inline]
    pub fn heading(&self) -> Option<Heading> {
        Heading::between(self.origin, self.destination)
    }
}
