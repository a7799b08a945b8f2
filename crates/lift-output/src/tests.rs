//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use lift_core::{Direction, ElevatorState};

    use crate::csv::CsvWriter;
    use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(elevator: u32, tick: u64) -> ElevatorSnapshotRow {
        ElevatorSnapshotRow {
            tick,
            elevator,
            floor:      elevator as i32 + 1,
            direction:  Direction::Up,
            state:      ElevatorState::Moving,
            passengers: 2,
            stops:      "4 6".to_owned(),
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, moves: 2, arrivals: 1, boarded: 3, alighted: 0, waiting: 5, faults: 0 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("elevator_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "elevator", "floor", "direction", "state", "passengers", "stops"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "moves", "arrivals", "boarded", "alighted", "waiting", "faults"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(1, 5), snap_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("elevator_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "5");      // tick
        assert_eq!(&rows[0][1], "1");      // elevator
        assert_eq!(&rows[0][3], "Up");
        assert_eq!(&rows[0][4], "Moving");
        assert_eq!(&rows[0][6], "4 6");
        assert_eq!(&rows[1][2], "3");      // floor
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        let fields: Vec<&str> = rows[0].iter().collect();
        assert_eq!(fields, ["3", "2", "1", "3", "0", "5", "0"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use std::io;

    use tempfile::TempDir;

    use lift_core::{BuildingConfig, Direction, ElevatorId};
    use lift_sim::{Building, BuildingBuilder};

    use crate::csv::CsvWriter;
    use crate::observer::TraceObserver;
    use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn tower() -> Building {
        let config = BuildingConfig::with_values(5, 2, 4, 1).unwrap();
        let mut b = BuildingBuilder::new(config).build().unwrap();
        b.elevator_mut(ElevatorId(1)).unwrap().add_destination(3, Direction::Stopped);
        b
    }

    fn read(dir: &TempDir, file: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    /// Fails every write.
    struct BrokenWriter {
        attempts: usize,
    }

    impl OutputWriter for BrokenWriter {
        fn write_snapshots(&mut self, _rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
            self.attempts += 1;
            Err(io::Error::other(format!("write {} failed", self.attempts)).into())
        }
        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(io::Error::other(format!("write {} failed", self.attempts)).into())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn run_writes_one_summary_per_tick_and_every_car() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = tower();
        let mut obs = TraceObserver::new(CsvWriter::new(dir.path()).unwrap());
        b.run_ticks(4, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let summaries = read(&dir, "tick_summaries.csv");
        assert_eq!(summaries.len(), 4);
        assert_eq!(&summaries[0][1], "1"); // one move on tick 0

        let snaps = read(&dir, "elevator_snapshots.csv");
        assert_eq!(snaps.len(), 8, "4 ticks x 2 cars");
        // Tick 0, E1: left floor 1 for floor 3.
        let first: Vec<&str> = snaps[0].iter().collect();
        assert_eq!(first, ["0", "1", "2", "Up", "Moving", "0", "3"]);
        let idle: Vec<&str> = snaps[1].iter().collect();
        assert_eq!(idle, ["0", "2", "1", "Stopped", "Stopped", "0", ""]);
    }

    #[test]
    fn snapshot_interval_thins_snapshots_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = tower();
        let mut obs = TraceObserver::with_interval(CsvWriter::new(dir.path()).unwrap(), 2);
        b.run_ticks(4, &mut obs);
        assert!(obs.take_error().is_none());

        assert_eq!(read(&dir, "tick_summaries.csv").len(), 4);
        let snaps = read(&dir, "elevator_snapshots.csv");
        assert_eq!(snaps.len(), 4, "ticks 0 and 2 x 2 cars");
        assert_eq!(&snaps[2][0], "2");
    }

    #[test]
    fn first_error_is_kept() {
        let mut b = tower();
        let mut obs = TraceObserver::new(BrokenWriter { attempts: 0 });
        b.run_ticks(3, &mut obs);

        let err = obs.take_error().expect("error stored");
        assert!(matches!(err, OutputError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: write 1 failed");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 6);
    }
}
