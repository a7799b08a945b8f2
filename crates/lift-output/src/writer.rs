//! The `OutputWriter` trait implemented by trace backends.

use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for elevator snapshots and tick summaries.
///
/// The observer never propagates these errors; it keeps the first one for
/// [`TraceObserver::take_error`][crate::TraceObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of elevator snapshots.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.  Safe to call twice.
    fn finish(&mut self) -> OutputResult<()>;
}
