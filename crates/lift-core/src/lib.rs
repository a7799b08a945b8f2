//! `lift-core`: foundational types for the `rust_lift` building simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only a handful of external ones (`rand`,
//! `thiserror`, `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `PassengerId`, `IdSequence`             |
//! | [`direction`]   | `Direction`, `Heading`, `ElevatorState`               |
//! | [`passenger`]   | `Passenger` travel intent                             |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng` (dispatcher-level, seeded)                   |
//! | [`config`]      | `BuildingConfig`, `Setting`                           |
//! | [`error`]       | `LiftError`, `LiftResult`                             |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BuildingConfig, Setting, UNSET};
pub use direction::{Direction, ElevatorState, Heading};
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, IdSequence, PassengerId};
pub use passenger::Passenger;
pub use rng::SimRng;
pub use time::Tick;
