//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `elevator_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::debug;

use crate::writer::OutputWriter;
use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADERS: [&str; 7] =
    ["tick", "elevator", "floor", "direction", "state", "passengers", "stops"];

pub const SUMMARY_HEADERS: [&str; 7] =
    ["tick", "moves", "arrivals", "boarded", "alighted", "waiting", "faults"];

/// Writes a trace to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        debug!("writing CSV trace to {}", dir.display());
        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elevator.to_string(),
                row.floor.to_string(),
                row.direction.to_string(),
                row.state.to_string(),
                row.passengers.to_string(),
                row.stops.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.moves.to_string(),
            row.arrivals.to_string(),
            row.boarded.to_string(),
            row.alighted.to_string(),
            row.waiting.to_string(),
            row.faults.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
