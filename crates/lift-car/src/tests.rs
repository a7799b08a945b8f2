//! Unit tests for lift-car.

use std::collections::BTreeSet;

use lift_core::{Direction, ElevatorId, ElevatorState, Heading, IdSequence, LiftError, Passenger, PassengerId};

use crate::{
    next_logical_stop, transition, CarError, Effect, Elevator, ElevatorFactory, ElevatorFault,
    Motion, Pickup, Shaft, StopBook,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn set(floors: &[i32]) -> BTreeSet<i32> {
    floors.iter().copied().collect()
}

fn car(start: i32, capacity: usize) -> Elevator {
    Elevator::new(ElevatorId(1), start, capacity, Shaft::for_floors(10)).unwrap()
}

fn rider(id: u64, origin: i32, destination: i32) -> Passenger {
    Passenger::new(PassengerId(id), origin, destination)
}

fn moving(floor: i32, heading: Heading) -> Motion {
    Motion {
        floor,
        direction:    heading.into(),
        state:        ElevatorState::Moving,
        last_heading: Some(heading),
    }
}

/// Step until idle with nothing left, or give up after `limit` steps.
fn run_until_idle(e: &mut Elevator, limit: usize) -> Option<usize> {
    for n in 1..=limit {
        e.step();
        if e.state() == ElevatorState::Stopped
            && e.direction() == Direction::Stopped
            && e.all_upcoming_stops().is_empty()
        {
            return Some(n);
        }
    }
    None
}

// ── StopBook ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stop_book {
    use super::*;

    #[test]
    fn pickups_deduplicate_by_floor_and_heading() {
        let mut book = StopBook::new();
        assert!(book.add_pickup(Pickup::new(4, Heading::Up)));
        assert!(!book.add_pickup(Pickup::new(4, Heading::Up)));
        assert!(book.add_pickup(Pickup::new(4, Heading::Down)));
        assert_eq!(book.pickups().len(), 2);
        assert_eq!(book.pickups_at(4).count(), 2);
    }

    #[test]
    fn drop_offs_are_a_set() {
        let mut book = StopBook::new();
        assert!(book.add_drop_off(7));
        assert!(!book.add_drop_off(7));
        assert_eq!(book.drop_offs().len(), 1);
    }

    #[test]
    fn upcoming_is_union_of_both() {
        let mut book = StopBook::new();
        book.add_drop_off(7);
        book.add_drop_off(2);
        book.add_pickup(Pickup::new(7, Heading::Down));
        book.add_pickup(Pickup::new(5, Heading::Up));
        assert_eq!(book.upcoming(), set(&[2, 5, 7]));
        assert!(!book.is_empty());
    }
}

// ── next_logical_stop ─────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use super::*;

    #[test]
    fn empty_has_no_stop() {
        assert_eq!(next_logical_stop(3, Some(Heading::Up), &set(&[])), None);
        assert_eq!(next_logical_stop(3, None, &set(&[])), None);
    }

    #[test]
    fn up_prefers_current_floor() {
        assert_eq!(next_logical_stop(4, Some(Heading::Up), &set(&[2, 4, 6])), Some(4));
    }

    #[test]
    fn up_takes_nearest_above() {
        assert_eq!(next_logical_stop(4, Some(Heading::Up), &set(&[1, 6, 9])), Some(6));
    }

    #[test]
    fn up_reverses_to_highest_below() {
        assert_eq!(next_logical_stop(8, Some(Heading::Up), &set(&[1, 3, 5])), Some(5));
    }

    #[test]
    fn down_takes_nearest_below() {
        assert_eq!(next_logical_stop(6, Some(Heading::Down), &set(&[2, 5, 9])), Some(5));
        assert_eq!(next_logical_stop(6, Some(Heading::Down), &set(&[6, 9])), Some(6));
    }

    #[test]
    fn down_reverses_to_lowest_above() {
        assert_eq!(next_logical_stop(2, Some(Heading::Down), &set(&[5, 8])), Some(5));
    }

    #[test]
    fn no_memory_picks_closest_then_lower() {
        assert_eq!(next_logical_stop(5, None, &set(&[1, 8])), Some(8));
        assert_eq!(next_logical_stop(5, None, &set(&[3, 7])), Some(3));
        assert_eq!(next_logical_stop(5, None, &set(&[5, 6])), Some(5));
    }
}

// ── transition ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn idle_without_stops() {
        let t = transition(Motion::at_rest(3), &StopBook::new());
        assert_eq!(t.effects, vec![Effect::Idle]);
        assert_eq!(t.motion, Motion::at_rest(3));
    }

    #[test]
    fn doors_open_unload_then_close() {
        let mut book = StopBook::new();
        book.add_drop_off(5);
        let open = Motion {
            floor:        5,
            direction:    Direction::Stopped,
            state:        ElevatorState::DoorsOpen,
            last_heading: Some(Heading::Up),
        };
        let t = transition(open, &book);
        assert_eq!(t.effects, vec![Effect::Unload { floor: 5 }, Effect::CloseDoors, Effect::Idle]);
        assert_eq!(t.motion.state, ElevatorState::Stopped);
        assert_eq!(t.motion.direction, Direction::Stopped);
        assert_eq!(t.motion.last_heading, Some(Heading::Up));
    }

    #[test]
    fn remaining_pickup_here_reopens_doors() {
        let mut book = StopBook::new();
        book.add_drop_off(5);
        book.add_pickup(Pickup::new(5, Heading::Down));
        let open = Motion {
            floor:        5,
            direction:    Direction::Stopped,
            state:        ElevatorState::DoorsOpen,
            last_heading: Some(Heading::Up),
        };
        let t = transition(open, &book);
        assert_eq!(
            t.effects,
            vec![
                Effect::Unload { floor: 5 },
                Effect::CloseDoors,
                Effect::Arrive { floor: 5 },
                Effect::ClearPickup(Pickup::new(5, Heading::Down)),
            ]
        );
        assert_eq!(t.motion.state, ElevatorState::DoorsOpen);
    }

    #[test]
    fn moves_one_floor_toward_target() {
        let mut book = StopBook::new();
        book.add_drop_off(7);
        let t = transition(Motion::at_rest(3), &book);
        assert_eq!(t.effects, vec![Effect::Move { from: 3, to: 4 }]);
        assert_eq!(t.motion, moving(4, Heading::Up));
    }

    #[test]
    fn arriving_clears_pickup_matching_travel_heading_only() {
        let mut book = StopBook::new();
        book.add_pickup(Pickup::new(4, Heading::Up));
        book.add_pickup(Pickup::new(4, Heading::Down));
        let t = transition(moving(3, Heading::Up), &book);
        assert_eq!(
            t.effects,
            vec![
                Effect::Move { from: 3, to: 4 },
                Effect::Arrive { floor: 4 },
                Effect::ClearPickup(Pickup::new(4, Heading::Up)),
            ]
        );
        assert_eq!(t.motion.state, ElevatorState::DoorsOpen);
        assert_eq!(t.motion.direction, Direction::Stopped);
    }

    #[test]
    fn arriving_without_matching_heading_clears_all_at_floor() {
        let mut book = StopBook::new();
        book.add_pickup(Pickup::new(3, Heading::Down));
        book.add_drop_off(6);
        let t = transition(moving(2, Heading::Up), &book);
        assert_eq!(
            t.effects,
            vec![
                Effect::Move { from: 2, to: 3 },
                Effect::Arrive { floor: 3 },
                Effect::ClearPickup(Pickup::new(3, Heading::Down)),
            ]
        );
    }

    #[test]
    fn stopped_at_a_stop_arrives_in_place() {
        let mut book = StopBook::new();
        book.add_pickup(Pickup::new(2, Heading::Up));
        let t = transition(Motion::at_rest(2), &book);
        assert_eq!(
            t.effects,
            vec![Effect::Arrive { floor: 2 }, Effect::ClearPickup(Pickup::new(2, Heading::Up))]
        );
        assert_eq!(t.motion.floor, 2);
    }

    #[test]
    fn out_of_service_is_frozen() {
        let mut book = StopBook::new();
        book.add_drop_off(9);
        let dead = Motion { state: ElevatorState::OutOfService, ..Motion::at_rest(4) };
        let t = transition(dead, &book);
        assert!(t.effects.is_empty());
        assert_eq!(t.motion, dead);
    }
}

// ── Elevator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod elevator {
    use super::*;

    #[test]
    fn new_car_is_idle_at_start() {
        let e = car(1, 5);
        assert_eq!(e.current_floor(), 1);
        assert_eq!(e.state(), ElevatorState::Stopped);
        assert_eq!(e.direction(), Direction::Stopped);
        assert!(e.all_upcoming_stops().is_empty());
    }

    #[test]
    fn rejects_zero_capacity_and_start_outside_shaft() {
        let zero = Elevator::new(ElevatorId(1), 1, 0, Shaft::for_floors(5));
        assert_eq!(zero.unwrap_err(), CarError::Config(LiftError::InvalidCapacity(0)));
        let outside = Elevator::new(ElevatorId(1), 6, 2, Shaft::for_floors(5));
        assert!(matches!(outside, Err(CarError::StartOutOfRange { floor: 6, .. })));
    }

    #[test]
    fn scenario_drop_off_from_ground() {
        let mut e = car(1, 5);
        e.add_destination(5, Direction::Stopped);

        for expected in 2..=4 {
            let r = e.step();
            assert_eq!(r.moved, Some((expected - 1, expected)));
            assert_eq!(e.current_floor(), expected);
            assert_eq!(e.state(), ElevatorState::Moving);
            assert_eq!(e.direction(), Direction::Up);
        }

        let r = e.step();
        assert_eq!(r.moved, Some((4, 5)));
        assert_eq!(r.arrived, Some(5));
        assert_eq!(e.state(), ElevatorState::DoorsOpen);
        assert_eq!(e.direction(), Direction::Stopped);

        for _ in 0..5 {
            e.step();
            assert_eq!(e.current_floor(), 5);
            assert_eq!(e.state(), ElevatorState::Stopped);
            assert_eq!(e.direction(), Direction::Stopped);
            assert!(e.all_upcoming_stops().is_empty());
        }
    }

    #[test]
    fn repeated_registration_is_a_no_op() {
        let mut e = car(1, 5);
        assert!(e.add_destination(3, Direction::Up));
        assert!(!e.add_destination(3, Direction::Up));
        assert!(e.add_destination(6, Direction::Stopped));
        assert!(!e.add_destination(6, Direction::Stopped));
        assert_eq!(e.assigned_pickups().len(), 1);
        assert_eq!(e.drop_off_floors().len(), 1);
    }

    #[test]
    fn add_destination_does_not_change_state() {
        let mut e = car(2, 5);
        e.add_destination(8, Direction::Down);
        assert_eq!(e.state(), ElevatorState::Stopped);
        assert_eq!(e.direction(), Direction::Stopped);
    }

    #[test]
    fn capacity_is_a_hard_cap() {
        let mut e = car(1, 2);
        assert!(e.add_passenger(rider(1, 1, 4)));
        assert!(e.add_passenger(rider(2, 1, 6)));
        assert!(!e.add_passenger(rider(3, 1, 9)));
        assert_eq!(e.passenger_count(), 2);
        assert!(e.is_full());
        assert_eq!(e.drop_off_floors(), &set(&[4, 6]));
    }

    #[test]
    fn unload_is_idempotent() {
        let mut e = car(4, 3);
        e.add_passenger(rider(1, 1, 4));
        e.add_passenger(rider(2, 1, 7));
        let off = e.unload_passengers();
        assert_eq!(off.len(), 1);
        assert_eq!(off[0].id, PassengerId(1));
        assert!(e.unload_passengers().is_empty());
        assert_eq!(e.drop_off_floors(), &set(&[7]));
    }

    #[test]
    fn riders_alight_on_step_after_arrival() {
        let mut e = car(1, 3);
        e.add_passenger(rider(1, 1, 3));
        e.step();
        let arrive = e.step();
        assert_eq!(arrive.arrived, Some(3));
        assert_eq!(e.passenger_count(), 1);
        let r = e.step();
        assert_eq!(r.alighted.len(), 1);
        assert_eq!(e.passenger_count(), 0);
        assert_eq!(e.state(), ElevatorState::Stopped);
    }

    #[test]
    fn scan_finishes_direction_before_reversing() {
        let mut e = car(5, 5);
        e.place(moving(5, Heading::Up));
        e.add_destination(3, Direction::Stopped);
        e.add_destination(7, Direction::Stopped);

        let mut visited = Vec::new();
        for _ in 0..20 {
            if let Some(f) = e.step().arrived {
                visited.push(f);
            }
        }
        assert_eq!(visited, vec![7, 3]);
    }

    #[test]
    fn finite_stops_terminate() {
        let mut e = car(5, 5);
        for f in [2, 9, 4] {
            e.add_destination(f, Direction::Stopped);
        }
        e.add_destination(7, Direction::Down);
        e.add_destination(3, Direction::Up);
        e.add_destination(3, Direction::Down);
        let steps = run_until_idle(&mut e, 200);
        assert!(steps.is_some(), "car never went idle: {}", e.status_line());
    }

    #[test]
    fn fault_takes_car_out_of_service() {
        let mut e = car(2, 5);
        e.add_destination(25, Direction::Stopped);
        let r = e.step();
        assert_eq!(
            r.fault,
            Some(ElevatorFault::StopOutOfRange { floor: 25, lowest: 1, highest: 10 })
        );
        assert_eq!(e.state(), ElevatorState::OutOfService);
        assert_eq!(e.direction(), Direction::Stopped);
        assert!(!e.in_service());

        let after = e.step();
        assert_eq!(after, Default::default());
        assert_eq!(e.current_floor(), 2);
        assert_eq!(e.state(), ElevatorState::OutOfService);
    }

    #[test]
    fn status_line_format() {
        let mut e = car(3, 4);
        e.add_passenger(rider(1, 3, 8));
        e.add_destination(5, Direction::Up);
        assert_eq!(
            e.status_line(),
            "Elevator E1: F3, Dir:Stopped, St:Stopped, Pax:1/4, Stops:[5, 8]"
        );
    }
}

// ── ElevatorFactory ───────────────────────────────────────────────────────────

#[cfg(test)]
mod factory {
    use super::*;

    fn factory(default_start: Option<i32>) -> ElevatorFactory {
        ElevatorFactory::new(IdSequence::new(), 4, default_start, Shaft::for_floors(10)).unwrap()
    }

    #[test]
    fn ids_come_from_the_sequence() {
        let mut f = factory(Some(1));
        assert_eq!(f.create(None).unwrap().id(), ElevatorId(1));
        assert_eq!(f.create(Some(6)).unwrap().id(), ElevatorId(2));
    }

    #[test]
    fn explicit_floor_beats_default() {
        let mut f = factory(Some(1));
        assert_eq!(f.create(Some(7)).unwrap().current_floor(), 7);
        assert_eq!(f.create(None).unwrap().current_floor(), 1);
    }

    #[test]
    fn missing_default_is_unresolved() {
        let mut f = factory(None);
        assert_eq!(
            f.create(None).unwrap_err(),
            CarError::Config(LiftError::UnresolvedStartingFloor)
        );
    }

    #[test]
    fn failed_create_keeps_id() {
        let mut f = factory(Some(1));
        assert!(f.create(Some(11)).is_err());
        assert_eq!(f.create(None).unwrap().id(), ElevatorId(1));
    }

    #[test]
    fn rejects_bad_capacity() {
        let r = ElevatorFactory::new(IdSequence::new(), 0, Some(1), Shaft::for_floors(3));
        assert_eq!(r.unwrap_err(), CarError::Config(LiftError::InvalidCapacity(0)));
    }

    #[test]
    fn shares_shaft_and_capacity() {
        let mut f = ElevatorFactory::new(IdSequence::new(), 6, Some(3), Shaft::for_floors(12)).unwrap();
        let e = f.create(None).unwrap();
        assert_eq!(e.shaft(), Shaft::for_floors(12));
        assert_eq!(f.shaft(), Shaft::for_floors(12));
        assert_eq!(e.max_capacity(), 6);
        assert_eq!(e.current_floor(), 3);
    }
}
