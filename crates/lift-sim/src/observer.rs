//! Observer hooks for progress reporting and data collection.

use lift_core::Tick;

use crate::{Building, TickReport};

/// Callbacks invoked by [`Building::run_ticks`] and [`Building::run_script`].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait BuildingObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick with its report and read-only access to the
    /// building, so writers can snapshot car state.
    fn on_tick_end(&mut self, _report: &TickReport, _building: &Building) {}

    /// Called once after the final tick of a run.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`BuildingObserver`] that does nothing.
pub struct NoopObserver;

impl BuildingObserver for NoopObserver {}
