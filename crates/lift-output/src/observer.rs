//! `TraceObserver<W>`: bridges `BuildingObserver` to an `OutputWriter`.

use log::error;

use lift_core::Tick;
use lift_sim::{Building, BuildingObserver, TickReport};

use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`BuildingObserver`] that writes a summary row every tick and a
/// snapshot of every car every `snapshot_interval` ticks.
///
/// Observer hooks cannot fail, so the first write error is stored and the
/// rest are logged.  Check [`take_error`][Self::take_error] after the run.
pub struct TraceObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> TraceObserver<W> {
    /// Snapshot every tick.
    pub fn new(writer: W) -> Self {
        Self::with_interval(writer, 1)
    }

    /// Snapshot on ticks that are a multiple of `interval` (0 is treated as 1).
    pub fn with_interval(writer: W, interval: u64) -> Self {
        Self {
            writer,
            snapshot_interval: interval.max(1),
            last_error:        None,
        }
    }

    /// Take the stored write error (if any) after the run.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            } else {
                error!("trace write failed: {e}");
            }
        }
    }
}

impl<W: OutputWriter> BuildingObserver for TraceObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport, building: &Building) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(report));
        self.store_err(result);

        if report.tick.0 % self.snapshot_interval != 0 {
            return;
        }
        let rows: Vec<ElevatorSnapshotRow> = building
            .elevators()
            .iter()
            .map(|car| ElevatorSnapshotRow::capture(report.tick, car))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
