//! `lift-floor`: per-floor waiting queues.
//!
//! Each [`Floor`] keeps two FIFO queues, one for riders heading up and one for
//! riders heading down.  Riders board in arrival order.

pub mod floor;


pub use floor::Floor;
