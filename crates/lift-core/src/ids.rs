//! Strongly typed identifier wrappers and the explicit sequence that mints them.
//!
//! Ids are never drawn from a process-wide counter.  Whoever creates
//! elevators or passengers owns an [`IdSequence`] and hands out ids from it,
//! so two buildings (or two tests) never share numbering state.

use std::fmt;
use std::marker::PhantomData;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw integer, as printed in status lines.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Identifier of an elevator car.  Status lines print it as `E{n}`.
    pub struct ElevatorId(u32);
}

typed_id! {
    /// Identifier of a passenger (one journey).
    pub struct PassengerId(u64);
}

// ── IdSequence ────────────────────────────────────────────────────────────────

/// A monotonically increasing id source for one id type.
///
/// ```rust
/// use lift_core::{ElevatorId, IdSequence};
///
/// let mut seq = IdSequence::<ElevatorId>::new();
/// assert_eq!(seq.next_id(), ElevatorId(1));
/// assert_eq!(seq.next_id(), ElevatorId(2));
/// ```
#[derive(Debug, Clone)]
pub struct IdSequence<T> {
    next:    u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T: SequenceId> IdSequence<T> {
    /// A sequence whose first id is 1.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A sequence whose first id is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first, _marker: PhantomData }
    }

    /// Hand out the next id and advance.
    pub fn next_id(&mut self) -> T {
        let id = T::from_raw(self.next);
        self.next += 1;
        id
    }
}

impl<T: SequenceId> Default for IdSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Id types that an [`IdSequence`] can mint.
pub trait SequenceId: Copy {
    fn from_raw(n: u64) -> Self;
}

impl SequenceId for ElevatorId {
    #[inline]
    fn from_raw(n: u64) -> Self {
        // Elevator counts come from an i32 setting; they never approach u32::MAX.
        ElevatorId(n as u32)
    }
}

impl SequenceId for PassengerId {
    #[inline]
    fn from_raw(n: u64) -> Self {
        PassengerId(n)
    }
}
