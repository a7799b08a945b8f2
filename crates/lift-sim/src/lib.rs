//! `lift-sim`: the building dispatcher.
//!
//! # Tick
//!
//! ```text
//! Building::step_simulation():
//!   ① Move       Elevator::step on every car (arrive, unload, close, move,
//!                or fault → OutOfService)
//!   ② Load       every car with doors open boards riders from its floor's
//!                queues, FIFO, up to capacity
//!   ③ Redispatch riders still waiting with no car assigned to
//!                their (floor, heading) go back through the scorer
//! ```
//!
//! Calls enter through [`Building::request_elevator`], which queues riders on
//! the floor and hands a pickup to the best-scoring car (see [`dispatch`]).
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, Heading};
//! use lift_sim::{BuildingBuilder, NoopObserver};
//!
//! let config = BuildingConfig::with_values(10, 2, 8, 1)?;
//! let mut building = BuildingBuilder::new(config).build()?;
//! building.request_elevator(5, Heading::Up, 3);
//! building.run_ticks(20, &mut NoopObserver);
//! for line in building.display_status() {
//!     println!("{line}");
//! }
//! ```

pub mod builder;
pub mod building;
pub mod dispatch;
pub mod error;
pub mod loading;
pub mod observer;
pub mod report;
pub mod script;
pub mod status;


pub use builder::BuildingBuilder;
pub use building::Building;
pub use dispatch::{dispatch_score, find_best_elevator_for_call};
pub use error::{SimError, SimResult};
pub use observer::{BuildingObserver, NoopObserver};
pub use report::TickReport;
pub use script::{load_script_csv, load_script_reader, CallScript, ScriptedCall};
pub use status::BuildingStatus;
