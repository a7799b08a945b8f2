//! Boarding riders from a floor into a car whose doors are open.

use log::debug;

use lift_car::Elevator;
use lift_core::{Direction, Heading, Passenger};
use lift_floor::Floor;

/// Board riders waiting at `floor` into `car`.
///
/// A car heading up boards the up queue; heading down, the down queue.  An
/// idle car boards the up queue first and only takes down-bound riders if no
/// up-bound rider got on at this stop.
pub fn load_passengers(car: &mut Elevator, floor: &mut Floor) -> Vec<Passenger> {
    let mut boarded = Vec::new();
    let direction = car.direction();
    let idle = direction.is_stopped();

    let mut boarded_up = 0;
    if direction == Direction::Up || (idle && floor.waiting_count(Heading::Up) > 0) {
        boarded_up = board(car, floor, Heading::Up, &mut boarded);
    }
    if direction == Direction::Down
        || (idle && floor.waiting_count(Heading::Down) > 0 && boarded_up == 0)
    {
        board(car, floor, Heading::Down, &mut boarded);
    }

    if !boarded.is_empty() {
        debug!(
            "E{}: {} passenger(s) boarded at floor {}",
            car.id().get(),
            boarded.len(),
            floor.number(),
        );
    }
    boarded
}

/// Pop riders from one queue until it is empty or the car refuses one; a
/// refused rider goes back to the head of the queue.
fn board(car: &mut Elevator, floor: &mut Floor, heading: Heading, boarded: &mut Vec<Passenger>) -> usize {
    let mut count = 0;
    while let Some(p) = floor.next_waiting_person(heading) {
        if !car.add_passenger(p) {
            floor.return_waiting_person(p);
            break;
        }
        boarded.push(p);
        count += 1;
    }
    count
}
