//! The set of floors a car still has to visit, and the SCAN rule that picks
//! the next one.

use std::collections::BTreeSet;

use lift_core::Heading;

/// A dispatcher-assigned promise to collect riders at `floor` travelling
/// `heading`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Pickup {
    pub floor:   i32,
    pub heading: Heading,
}

impl Pickup {
    pub fn new(floor: i32, heading: Heading) -> Self {
        Self { floor, heading }
    }
}

/// Drop-off floors plus assigned pickups.
///
/// Both halves have set semantics: registering the same drop-off floor or the
/// same `(floor, heading)` pickup twice leaves one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopBook {
    drop_offs: BTreeSet<i32>,
    pickups:   BTreeSet<Pickup>,
}

impl StopBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `floor` was not already a drop-off.
    pub fn add_drop_off(&mut self, floor: i32) -> bool {
        self.drop_offs.insert(floor)
    }

    /// Returns `true` if the pickup was not already assigned.
    pub fn add_pickup(&mut self, pickup: Pickup) -> bool {
        self.pickups.insert(pickup)
    }

    pub fn remove_drop_off(&mut self, floor: i32) -> bool {
        self.drop_offs.remove(&floor)
    }

    pub fn remove_pickup(&mut self, pickup: Pickup) -> bool {
        self.pickups.remove(&pickup)
    }

    #[inline]
    pub fn drop_offs(&self) -> &BTreeSet<i32> {
        &self.drop_offs
    }

    #[inline]
    pub fn pickups(&self) -> &BTreeSet<Pickup> {
        &self.pickups
    }

    #[inline]
    pub fn has_pickup(&self, pickup: Pickup) -> bool {
        self.pickups.contains(&pickup)
    }

    /// Pickups assigned at `floor`, in either heading.
    pub fn pickups_at(&self, floor: i32) -> impl Iterator<Item = Pickup> + '_ {
        self.pickups.iter().copied().filter(move |p| p.floor == floor)
    }

    /// Every floor the car must still visit ("AllUpcomingStops").
    pub fn upcoming(&self) -> BTreeSet<i32> {
        self.drop_offs
            .iter()
            .copied()
            .chain(self.pickups.iter().map(|p| p.floor))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.drop_offs.is_empty() && self.pickups.is_empty()
    }
}

/// Choose the next floor to head for from `floor`.
///
/// - `Some(Up)`: `floor` itself if it is a stop, else the nearest stop above,
///   else (nothing at or above) the highest stop below.
/// - `Some(Down)`: mirror image.
/// - `None` (no travel memory): the closest stop, lower floor on a tie.
///
/// Returns `None` when `stops` is empty.
pub fn next_logical_stop(floor: i32, heading: Option<Heading>, stops: &BTreeSet<i32>) -> Option<i32> {
    if stops.is_empty() {
        return None;
    }
    match heading {
        Some(Heading::Up) => {
            if stops.contains(&floor) {
                return Some(floor);
            }
            stops
                .range(floor + 1..)
                .next()
                .or_else(|| stops.range(..floor).next_back())
                .copied()
        }
        Some(Heading::Down) => {
            if stops.contains(&floor) {
                return Some(floor);
            }
            stops
                .range(..floor)
                .next_back()
                .or_else(|| stops.range(floor + 1..).next())
                .copied()
        }
        None => stops
            .iter()
            .copied()
            .min_by_key(|&s| ((s - floor).abs(), s)),
    }
}
