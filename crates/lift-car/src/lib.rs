//! `lift-car`: the per-elevator movement state machine.
//!
//! # One step
//!
//! ```text
//! Elevator::step():
//!   ① validate  : stops and position inside the shaft, capacity respected;
//!                  any violation puts the car OutOfService
//!   ② transition: pure function (Motion, StopBook) → (Motion, [Effect])
//!                    DoorsOpen → Unload, CloseDoors
//!                    next stop (SCAN) == here  → Arrive, ClearPickup*
//!                    next stop elsewhere       → Move one floor (+ Arrive if
//!                                                the new floor is a stop)
//!                    no stops                  → Idle
//!   ③ apply     : unload passengers, clear serviced pickups, commit Motion
//! ```
//!
//! The transition function never touches the car, so every rule of the state
//! machine can be tested on plain values.

pub mod elevator;
pub mod error;
pub mod factory;
pub mod stops;
pub mod transition;

#[cfg(test)]
mod tests;

pub use elevator::{Elevator, Shaft, StepReport};
pub use error::{CarError, CarResult, ElevatorFault};
pub use factory::ElevatorFactory;
pub use stops::{next_logical_stop, Pickup, StopBook};
pub use transition::{transition, Effect, Motion, Transition};
