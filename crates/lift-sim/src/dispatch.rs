//! Elevator selection for hall calls.
//!
//! # Dispatch score
//!
//! Lower is better.
//!
//! ```text
//! score = |car.floor − call.floor|
//!       + total_floors          (unless idle, or already heading the call's
//!                                way with the call still ahead)
//!       + passengers on board
//!       + upcoming stops
//! ```
//!
//! Out-of-service cars and full cars with nobody bound for the call floor are
//! not eligible.  Ties go to the car with fewer passengers, then the lower id.

use lift_car::Elevator;
use lift_core::{Direction, ElevatorId, Heading};

/// Score `car` for a call at `call_floor` heading `heading`, or `None` if the
/// car may not take it.
pub fn dispatch_score(car: &Elevator, call_floor: i32, heading: Heading, total_floors: i32) -> Option<i64> {
    if !car.in_service() {
        return None;
    }
    if car.is_full() && !car.has_passenger_for(call_floor) {
        return None;
    }

    let floor = car.current_floor();
    let mut score = (i64::from(floor) - i64::from(call_floor)).abs();

    let on_the_way = match (car.direction(), heading) {
        (Direction::Up, Heading::Up)     => floor <= call_floor,
        (Direction::Down, Heading::Down) => floor >= call_floor,
        _ => false,
    };
    if !car.is_idle() && !on_the_way {
        score += i64::from(total_floors);
    }

    score += car.passenger_count() as i64;
    score += car.all_upcoming_stops().len() as i64;
    Some(score)
}

/// Pick the best eligible car for a call, or `None` if none qualifies.
pub fn find_best_elevator_for_call(
    elevators:    &[Elevator],
    call_floor:   i32,
    heading:      Heading,
    total_floors: i32,
) -> Option<ElevatorId> {
    best_of(elevators.iter(), call_floor, heading, total_floors)
}

/// Like [`find_best_elevator_for_call`] over any set of candidate cars.
pub(crate) fn best_of<'a>(
    candidates:   impl Iterator<Item = &'a Elevator>,
    call_floor:   i32,
    heading:      Heading,
    total_floors: i32,
) -> Option<ElevatorId> {
    candidates
        .filter_map(|car| {
            dispatch_score(car, call_floor, heading, total_floors)
                .map(|score| (score, car.passenger_count(), car.id()))
        })
        .min()
        .map(|(_, _, id)| id)
}
